//! Integration tests for the git-backed commit source.

mod common;

use common::TestRepo;
use cutejoe::error::GitError;
use cutejoe::git::{CommitSource, DEFAULT_TAG, GitCommitSource};

fn source(repo: &TestRepo) -> GitCommitSource {
    GitCommitSource::open(repo.path()).expect("Failed to open repository")
}

#[test]
fn test_unreleased_commits_between_hashes() {
    let repo = TestRepo::new();
    let base = repo.commit("chore: base");
    repo.commit("add: initial setup, readme");
    let last = repo.commit("add: changelog and config commands");

    let commits = source(&repo)
        .unreleased_commits(&base.to_string(), &last.to_string())
        .unwrap();

    assert_eq!(
        commits,
        "add: changelog and config commands\nadd: initial setup, readme"
    );
}

#[test]
fn test_unreleased_commits_from_tag_to_head() {
    let repo = TestRepo::new();
    let released = repo.commit("fixed: released");
    repo.tag_lightweight("v0.1.0", released);
    repo.commit("added: feature");

    let commits = source(&repo).unreleased_commits("v0.1.0", "HEAD").unwrap();
    assert_eq!(commits, "added: feature");
}

#[test]
fn test_unreleased_commits_empty_range() {
    let repo = TestRepo::new();
    let head = repo.commit("fixed: only");

    let commits = source(&repo)
        .unreleased_commits(&head.to_string(), "HEAD")
        .unwrap();
    assert_eq!(commits, "");
}

#[test]
fn test_unreleased_commits_only_uses_subject() {
    let repo = TestRepo::new();
    let base = repo.commit("chore: base");
    repo.commit("added: subject line\n\nLonger body that is not part of the subject.");

    let commits = source(&repo)
        .unreleased_commits(&base.to_string(), "HEAD")
        .unwrap();
    assert_eq!(commits, "added: subject line");
}

#[test]
fn test_unreleased_commits_unknown_reference() {
    let repo = TestRepo::new();
    repo.commit("fixed: only");

    let err = source(&repo)
        .unreleased_commits("does-not-exist", "HEAD")
        .unwrap_err();
    assert!(matches!(err, GitError::ReferenceNotFound(ref name, _) if name == "does-not-exist"));
}

#[test]
fn test_last_tag_without_tags() {
    let repo = TestRepo::new();
    repo.commit("fixed: only");

    assert_eq!(source(&repo).last_tag(), DEFAULT_TAG);
}

#[test]
fn test_last_tag_in_empty_repository() {
    let repo = TestRepo::new();

    assert_eq!(source(&repo).last_tag(), "v0.0.0");
}

#[test]
fn test_last_tag_strips_suffix() {
    let repo = TestRepo::new();
    let oid = repo.commit("fixed: only");
    repo.tag_lightweight("v0.1.0-extra", oid);

    assert_eq!(source(&repo).last_tag(), "v0.1.0");
}

#[test]
fn test_last_tag_is_nearest_to_head() {
    let repo = TestRepo::new();
    let first = repo.commit("added: first");
    repo.tag_lightweight("v0.1.0", first);
    let second = repo.commit("added: second");
    repo.tag_annotated("v0.2.0", second, "Release v0.2.0");
    repo.commit("fixed: unreleased");

    assert_eq!(source(&repo).last_tag(), "v0.2.0");
}

#[test]
fn test_last_tag_ignores_non_release_tags() {
    let repo = TestRepo::new();
    let first = repo.commit("added: first");
    repo.tag_lightweight("v1.2.3", first);
    let second = repo.commit("fixed: second");
    repo.tag_lightweight("nightly-2026-02-05", second);
    repo.tag_lightweight("1.3.0", second);

    assert_eq!(source(&repo).last_tag(), "v1.2.3");
}

#[test]
fn test_last_tag_skips_leading_zero_tags() {
    let repo = TestRepo::new();
    let first = repo.commit("added: first");
    repo.tag_lightweight("v1.1.0", first);
    let second = repo.commit("fixed: second");
    repo.tag_lightweight("v1.02.0", second);
    repo.commit("fixed: bug");

    let tag = source(&repo).last_tag();
    assert_eq!(tag, "v1.1.0");
    assert!(cutejoe::version::parse_tag(&tag).is_ok());
}

#[test]
fn test_last_tag_ignores_unreachable_tags() {
    let repo = TestRepo::new();
    let first = repo.commit("added: first");
    repo.tag_lightweight("v0.1.0", first);
    let second = repo.commit("break: second");
    repo.tag_lightweight("v1.0.0", second);
    repo.detach_head(first);

    assert_eq!(source(&repo).last_tag(), "v0.1.0");
}

#[test]
fn test_project_url_without_remote() {
    let repo = TestRepo::new();
    repo.commit("fixed: only");

    assert_eq!(source(&repo).project_url().unwrap(), "");
}

#[test]
fn test_project_url_with_ssh_remote() {
    let repo = TestRepo::new();
    repo.remote("origin", "git@github.com:MatheusBrochi/CuteJoe.git");

    assert_eq!(
        source(&repo).project_url().unwrap(),
        "https://github.com/MatheusBrochi/CuteJoe"
    );
}

#[test]
fn test_project_url_with_https_remote() {
    let repo = TestRepo::new();
    repo.remote("origin", "https://github.com/MatheusBrochi/CuteJoe");

    assert_eq!(
        source(&repo).project_url().unwrap(),
        "https://github.com/MatheusBrochi/CuteJoe"
    );
}

#[test]
fn test_project_url_ignores_other_remotes() {
    let repo = TestRepo::new();
    repo.remote("upstream", "git@github.com:Owner/Repo.git");

    assert_eq!(source(&repo).project_url().unwrap(), "");
}

#[test]
fn test_open_from_subdirectory() {
    let repo = TestRepo::new();
    repo.commit("fixed: only");
    let sub = repo.path().join("sub");
    std::fs::create_dir_all(&sub).unwrap();

    assert!(GitCommitSource::open(&sub).is_ok());
}
