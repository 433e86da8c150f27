use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("The specified path '{0}' is not a valid directory.")]
    InvalidPath(String),

    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error executing command '{command}': {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        GitSemverError::InvalidPath(path.into())
    }

    /// Create a command failure error from a command line and its captured stderr
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        GitSemverError::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        GitSemverError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Whether a query returning this error means the query mechanism
    /// itself is unusable, as opposed to a query that ran and failed.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GitSemverError::CommandSpawn { .. } | GitSemverError::Io(_)
        )
    }
}
