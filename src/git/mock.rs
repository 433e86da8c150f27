use crate::error::{GitSemverError, Result};
use crate::git::RepositoryQuery;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
///
/// Each query answers with its canned value, or fails like the matching
/// git command would when no value was set.
#[derive(Debug, Default)]
pub struct MockRepository {
    tag: Option<String>,
    commits_since: Option<u64>,
    branch: Option<String>,
    messages: Option<String>,
    unusable: bool,
    calls: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a mock where every query fails
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_commits_since(mut self, count: u64) -> Self {
        self.commits_since = Some(count);
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_messages(mut self, messages: impl Into<String>) -> Self {
        self.messages = Some(messages.into());
        self
    }

    /// Make every query fail as if git could not be started
    pub fn unusable(mut self) -> Self {
        self.unusable = true;
        self
    }

    /// Queries made so far, in order, with their range argument
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn answer<T: Clone>(&self, call: String, value: &Option<T>) -> Result<T> {
        self.calls.borrow_mut().push(call.clone());

        if self.unusable {
            return Err(GitSemverError::CommandSpawn {
                command: call,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "git not found"),
            });
        }

        value
            .clone()
            .ok_or_else(|| GitSemverError::command_failed(call, "fatal: mock has no answer"))
    }
}

impl RepositoryQuery for MockRepository {
    fn latest_tag(&self) -> Result<String> {
        self.answer("latest_tag".to_string(), &self.tag)
    }

    fn commits_since(&self, tag: &str) -> Result<u64> {
        self.answer(format!("commits_since {}", tag), &self.commits_since)
    }

    fn current_branch(&self) -> Result<String> {
        self.answer("current_branch".to_string(), &self.branch)
    }

    fn log_messages(&self, tag: &str) -> Result<String> {
        self.answer(format!("log_messages {}", tag), &self.messages)
    }
}
