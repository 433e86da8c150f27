use crate::error::Result;
use crate::git::RepositoryQuery;
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo, Revwalk, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our query interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Walk of the commits reachable from HEAD but not from `tag`
    fn range_walk(&self, tag: &str) -> Result<Revwalk<'_>> {
        let tag_commit = self.repo.revparse_single(tag)?.peel_to_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(tag_commit.id())?;

        Ok(revwalk)
    }
}

impl RepositoryQuery for Git2Repository {
    fn latest_tag(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;

        let mut options = DescribeOptions::new();
        options.describe_tags();
        let describe = head.as_object().describe(&options)?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        Ok(describe.format(Some(&format))?)
    }

    fn commits_since(&self, tag: &str) -> Result<u64> {
        let mut count = 0;
        for oid in self.range_walk(tag)? {
            oid?;
            count += 1;
        }

        Ok(count)
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if !head.is_branch() {
            return Ok("HEAD".to_string());
        }

        Ok(String::from_utf8_lossy(head.shorthand_bytes()).into_owned())
    }

    fn log_messages(&self, tag: &str) -> Result<String> {
        let mut messages = Vec::new();

        for oid in self.range_walk(tag)? {
            let commit = self.repo.find_commit(oid?)?;
            messages.push(String::from_utf8_lossy(commit.message_bytes()).into_owned());
        }

        Ok(messages.join("\n").trim().to_string())
    }
}
