use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::branch::BranchContext;
use crate::config::Config;
use crate::error::{GitSemverError, Result};
use crate::git::RepositoryQuery;
use crate::markers::MarkerScanner;
use crate::version::{Version, DEFAULT_TAG};

/// Branch reported when the current branch cannot be determined.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Result of one version resolution, printed as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub latest_tag: String,
    pub commits_since_tag: u64,
    pub branch: String,
    pub semver: String,
}

/// Derives a version from tags and `+semver:` markers
pub struct VersionResolver {
    config: Config,
    scanner: MarkerScanner,
}

/// Check that `repo_path` is an existing directory
pub fn validate_repo_path(repo_path: &Path) -> Result<()> {
    if !repo_path.is_dir() {
        return Err(GitSemverError::invalid_path(
            repo_path.display().to_string(),
        ));
    }
    Ok(())
}

/// Use the query's answer, or `default` when the query ran but failed.
///
/// Fatal errors are propagated.
fn or_fallback<T: std::fmt::Debug>(query: &str, result: Result<T>, default: T) -> Result<T> {
    match result {
        Ok(value) => {
            tracing::debug!(query, ?value, "query answered");
            Ok(value)
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            tracing::debug!(query, error = %e, fallback = ?default, "query failed, using fallback");
            Ok(default)
        }
    }
}

impl VersionResolver {
    /// Create a new resolver
    pub fn new(config: Config) -> Result<Self> {
        Ok(VersionResolver {
            config,
            scanner: MarkerScanner::new()?,
        })
    }

    /// Resolve the version of the repository at `repo_path` through `repo`.
    ///
    /// `repo_path` must be an existing directory. Each query is made once;
    /// a failing query falls back to its default independently of the others.
    pub fn resolve<R: RepositoryQuery + ?Sized>(
        &self,
        repo_path: &Path,
        repo: &R,
    ) -> Result<VersionInfo> {
        validate_repo_path(repo_path)?;
        self.resolve_with(repo)
    }

    /// Resolve the version from `repo` without a path check
    pub fn resolve_with<R: RepositoryQuery + ?Sized>(&self, repo: &R) -> Result<VersionInfo> {
        let latest_tag = or_fallback("latest_tag", repo.latest_tag(), DEFAULT_TAG.to_string())?;
        let commits_since_tag = or_fallback("commits_since", repo.commits_since(&latest_tag), 0)?;
        let branch = or_fallback(
            "current_branch",
            repo.current_branch(),
            UNKNOWN_BRANCH.to_string(),
        )?;
        let messages = or_fallback("log_messages", repo.log_messages(&latest_tag), String::new())?;

        let semver = self.compute_semver(&latest_tag, &messages, &branch, commits_since_tag);
        tracing::info!(%semver, %latest_tag, %branch, commits_since_tag, "resolved version");

        Ok(VersionInfo {
            latest_tag,
            commits_since_tag,
            branch,
            semver,
        })
    }

    /// Bumped version for `latest_tag` given the commit messages since it
    pub fn next_version(&self, latest_tag: &str, messages: &str) -> Version {
        let current = Version::from_tag_or_default(latest_tag);
        let bump = self.scanner.classify(messages);
        tracing::debug!(%current, ?bump, "classified commits");

        current.bump(bump)
    }

    /// Full version string: bumped triple plus the branch label
    pub fn compute_semver(
        &self,
        latest_tag: &str,
        messages: &str,
        branch: &str,
        commits_since_tag: u64,
    ) -> String {
        let version = self.next_version(latest_tag, messages);
        let context = BranchContext::new(branch, self.config.main_branches.as_slice());

        format!("{}{}", version, context.version_label(commits_since_tag))
    }
}
