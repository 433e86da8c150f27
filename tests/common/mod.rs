// Shared fixtures: throwaway git repositories built with git2
#![allow(dead_code)]

use git2::{Oid, Repository, RepositoryInitOptions, Signature};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Empty repository whose initial branch is `main`
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");

        let mut options = RepositoryInitOptions::new();
        options.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &options).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit an empty tree on the current branch
    pub fn commit(&self, message: &str) -> Oid {
        let signature = Signature::now("Test User", "test@example.com").expect("signature");
        let tree_id = self
            .repo
            .treebuilder(None)
            .expect("treebuilder")
            .write()
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .expect("Could not create commit")
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("HEAD commit");
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Could not create tag");
    }

    /// Create a branch at HEAD and switch to it
    pub fn checkout_new_branch(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("HEAD commit");
        self.repo
            .branch(name, &head, false)
            .expect("Could not create branch");
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .expect("Could not switch branch");
    }

    /// Point HEAD directly at the current commit
    pub fn detach_head(&self) {
        let oid = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.target())
            .expect("HEAD target");
        self.repo.set_head_detached(oid).expect("Could not detach");
    }
}

/// Whether a usable `git` binary is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
