// tests/resolver_test.rs
mod common;

use common::{git_available, TestRepo};
use git_semver::config::Config;
use git_semver::git::{Git2Repository, GitCommand, MockRepository};
use git_semver::{VersionInfo, VersionResolver};

fn resolver() -> VersionResolver {
    VersionResolver::new(Config::default()).unwrap()
}

#[test]
fn test_main_branch_with_new_commits() {
    let repo = MockRepository::new()
        .with_tag("v1.2.3")
        .with_commits_since(5)
        .with_branch("main")
        .with_messages("add search\n\n+semver: feat\n");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(
        info,
        VersionInfo {
            latest_tag: "v1.2.3".to_string(),
            commits_since_tag: 5,
            branch: "main".to_string(),
            semver: "1.3.0+5".to_string(),
        }
    );
}

#[test]
fn test_main_branch_without_new_commits() {
    let repo = MockRepository::new()
        .with_tag("1.2.3")
        .with_commits_since(0)
        .with_branch("master")
        .with_messages("");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(info.semver, "1.2.4");
}

#[test]
fn test_feature_branch_gets_prerelease_label() {
    let repo = MockRepository::new()
        .with_tag("v1.2.3")
        .with_commits_since(3)
        .with_branch("feature/x")
        .with_messages("+semver: breaking\n\n+semver: fix");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(info.branch, "feature/x");
    assert_eq!(info.semver, "2.0.0-feature.x.3");
}

#[test]
fn test_branch_with_spaces() {
    let repo = MockRepository::new()
        .with_tag("v0.1.0")
        .with_commits_since(1)
        .with_branch("my topic/part 2")
        .with_messages("+semver: patch");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(info.semver, "0.1.1-my_topic.part_2.1");
}

#[test]
fn test_unparsable_tag_is_kept_in_output() {
    let repo = MockRepository::new()
        .with_tag("release-x")
        .with_commits_since(2)
        .with_branch("main")
        .with_messages("+semver: minor");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(info.latest_tag, "release-x");
    assert_eq!(info.semver, "0.1.0+2");
}

#[test]
fn test_missing_tag_uses_default_range() {
    let repo = MockRepository::new()
        .with_branch("main")
        .with_messages("+semver: major");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(info.latest_tag, "0.0.0");
    assert_eq!(info.commits_since_tag, 0);
    assert_eq!(info.semver, "1.0.0");
    assert_eq!(
        repo.calls(),
        vec![
            "latest_tag",
            "commits_since 0.0.0",
            "current_branch",
            "log_messages 0.0.0"
        ]
    );
}

#[test]
fn test_each_query_falls_back_independently() {
    let repo = MockRepository::new()
        .with_tag("v3.1.4")
        .with_messages("+semver: fix");

    let info = resolver().resolve_with(&repo).unwrap();
    assert_eq!(info.commits_since_tag, 0);
    assert_eq!(info.branch, "unknown");
    assert_eq!(info.semver, "3.1.5-unknown.0");
}

#[test]
fn test_custom_main_branches() {
    let config = Config::default().with_main_branches_override(Some("trunk,release.2.x"));
    let resolver = VersionResolver::new(config).unwrap();

    let trunk = MockRepository::new()
        .with_tag("v2.0.0")
        .with_commits_since(4)
        .with_branch("trunk")
        .with_messages("");
    assert_eq!(resolver.resolve_with(&trunk).unwrap().semver, "2.0.1+4");

    let release = MockRepository::new()
        .with_tag("v2.0.0")
        .with_commits_since(1)
        .with_branch("release/2.x")
        .with_messages("");
    assert_eq!(resolver.resolve_with(&release).unwrap().semver, "2.0.1+1");

    let main = MockRepository::new()
        .with_tag("v2.0.0")
        .with_commits_since(1)
        .with_branch("main")
        .with_messages("");
    assert_eq!(resolver.resolve_with(&main).unwrap().semver, "2.0.1-main.1");
}

#[test]
fn test_resolve_real_repository_with_git2() {
    let repo = TestRepo::new();
    repo.commit("Initial commit");
    repo.tag("v1.0.0");
    repo.commit("fix: crash\n\n+semver: fix");
    repo.commit("new api\n\n+semver: breaking");

    let query = Git2Repository::open(repo.path()).unwrap();
    let info = resolver().resolve(repo.path(), &query).unwrap();

    assert_eq!(
        info,
        VersionInfo {
            latest_tag: "v1.0.0".to_string(),
            commits_since_tag: 2,
            branch: "main".to_string(),
            semver: "2.0.0+2".to_string(),
        }
    );
}

#[test]
fn test_resolve_untagged_feature_branch_with_git2() {
    let repo = TestRepo::new();
    repo.commit("Initial commit");
    repo.checkout_new_branch("feature/login");
    repo.commit("login form\n\n+semver: feature");

    let query = Git2Repository::open(repo.path()).unwrap();
    let info = resolver().resolve(repo.path(), &query).unwrap();

    // no tag: the 0.0.0..HEAD range cannot be resolved, so no commits or messages
    assert_eq!(info.latest_tag, "0.0.0");
    assert_eq!(info.commits_since_tag, 0);
    assert_eq!(info.semver, "0.0.1-feature.login.0");
}

#[test]
fn test_backends_agree() {
    if !git_available() {
        eprintln!("git not available, skipping");
        return;
    }

    let repo = TestRepo::new();
    repo.commit("Initial commit");
    repo.tag("v0.3.0");
    repo.checkout_new_branch("bugfix/issue-123");
    repo.commit("handle empty input\n\n+semver:patch");

    let via_git2 = resolver()
        .resolve(repo.path(), &Git2Repository::open(repo.path()).unwrap())
        .unwrap();
    let via_git = resolver()
        .resolve(repo.path(), &GitCommand::new(repo.path()))
        .unwrap();

    assert_eq!(via_git, via_git2);
    assert_eq!(via_git.semver, "0.3.1-bugfix.issue-123.1");
}

#[test]
fn test_missing_git_binary_is_fatal() {
    let repo = TestRepo::new();
    let query = GitCommand::new(repo.path()).with_program("git-semver-no-such-binary");

    let err = resolver().resolve(repo.path(), &query).unwrap_err();
    assert!(err.is_fatal());
}
