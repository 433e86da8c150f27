//! Repository query abstraction layer
//!
//! The resolver only needs four facts from version control. They are
//! behind the [RepositoryQuery] trait so the source can be swapped:
//!
//! - [command::GitCommand]: runs the `git` binary (default)
//! - [repository::Git2Repository]: answers the same queries through libgit2
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust
//! # use git_semver::git::RepositoryQuery;
//! # fn example<R: RepositoryQuery>(repo: &R) -> git_semver::Result<()> {
//! let tag = repo.latest_tag()?;
//! let count = repo.commits_since(&tag)?;
//! println!("{} commits since {}", count, tag);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommand;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use crate::error::Result;

/// Read-only version-control queries used to derive a version
///
/// ## Error Handling
///
/// A query that ran but could not answer (no tags, detached or unborn
/// HEAD, unknown revision) returns a recoverable error and the caller
/// falls back to a default. Errors for which
/// [crate::error::GitSemverError::is_fatal] holds mean the query
/// mechanism itself is unusable.
pub trait RepositoryQuery {
    /// Nearest tag reachable from HEAD (`git describe --tags --abbrev=0`)
    fn latest_tag(&self) -> Result<String>;

    /// Number of commits in `<tag>..HEAD` (`git rev-list <tag>..HEAD --count`)
    fn commits_since(&self, tag: &str) -> Result<u64>;

    /// Short name of the checked out branch (`git rev-parse --abbrev-ref HEAD`)
    ///
    /// A detached HEAD is reported as `HEAD`.
    fn current_branch(&self) -> Result<String>;

    /// Full messages of the commits in `<tag>..HEAD` (`git log <tag>..HEAD --pretty=%B`)
    fn log_messages(&self, tag: &str) -> Result<String>;
}

impl<R: RepositoryQuery + ?Sized> RepositoryQuery for Box<R> {
    fn latest_tag(&self) -> Result<String> {
        (**self).latest_tag()
    }

    fn commits_since(&self, tag: &str) -> Result<u64> {
        (**self).commits_since(tag)
    }

    fn current_branch(&self) -> Result<String> {
        (**self).current_branch()
    }

    fn log_messages(&self, tag: &str) -> Result<String> {
        (**self).log_messages(tag)
    }
}

/// Which implementation answers repository queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RepositoryBackend {
    /// Run the `git` command line tool
    #[default]
    Git,
    /// Use the bundled libgit2 library
    Libgit2,
}

impl RepositoryBackend {
    /// Create the query implementation for the repository at `path`
    pub fn open(self, path: &Path) -> Result<Box<dyn RepositoryQuery>> {
        let query: Box<dyn RepositoryQuery> = match self {
            RepositoryBackend::Git => Box::new(GitCommand::new(path)),
            RepositoryBackend::Libgit2 => Box::new(Git2Repository::open(path)?),
        };
        Ok(query)
    }
}
