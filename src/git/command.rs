use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GitSemverError, Result};
use crate::git::RepositoryQuery;

/// Answers repository queries by running the `git` binary
pub struct GitCommand {
    program: OsString,
    repo_path: PathBuf,
}

impl GitCommand {
    /// Query the repository at `repo_path` with `git` from `PATH`
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        GitCommand {
            program: OsString::from("git"),
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Use a different executable in place of `git`
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git with `args` in the repository and return its trimmed stdout.
    ///
    /// A non-zero exit status is a [GitSemverError::CommandFailed] carrying
    /// the captured stderr. Failing to start the process at all is a
    /// [GitSemverError::CommandSpawn].
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, dir = %self.repo_path.display(), "running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|source| GitSemverError::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitSemverError::command_failed(command, stderr.trim()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl RepositoryQuery for GitCommand {
    fn latest_tag(&self) -> Result<String> {
        self.run(&["describe", "--tags", "--abbrev=0"])
    }

    fn commits_since(&self, tag: &str) -> Result<u64> {
        let range = format!("{}..HEAD", tag);
        let count = self.run(&["rev-list", &range, "--count"])?;

        count
            .parse::<u64>()
            .map_err(|_| GitSemverError::parse(format!("Invalid commit count: '{}'", count)))
    }

    fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn log_messages(&self, tag: &str) -> Result<String> {
        let range = format!("{}..HEAD", tag);
        self.run(&["log", &range, "--pretty=%B"])
    }
}
