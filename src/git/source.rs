//! Version-control queries consumed by the changelog engine.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

use super::commits::commit_subjects;
use super::range::resolve_range;
use super::remote::project_url;
use super::tags::{DEFAULT_TAG, latest_release_tag};

/// Read-only access to commit history.
///
/// This abstraction allows faking version control in tests.
#[cfg_attr(test, mockall::automock)]
pub trait CommitSource {
    /// Newline-joined subject lines of commits in `start..end`.
    fn unreleased_commits(&self, start: &str, end: &str) -> Result<String, GitError>;

    /// Most recent `vMAJOR.MINOR.PATCH` tag, or `v0.0.0`. Never fails.
    fn last_tag(&self) -> String;

    /// HTTPS URL of the project, or an empty string without a remote.
    fn project_url(&self) -> Result<String, GitError>;
}

/// [`CommitSource`] backed by a local git repository.
pub struct GitCommitSource {
    repo: Repository,
}

impl GitCommitSource {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(GitError::OpenRepository)?;
        Ok(Self { repo })
    }

    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }
}

impl CommitSource for GitCommitSource {
    fn unreleased_commits(&self, start: &str, end: &str) -> Result<String, GitError> {
        let range = resolve_range(&self.repo, start, end)?;
        let subjects = commit_subjects(&self.repo, range.from, range.to)?;
        debug!(
            count = subjects.len(),
            from = %range.from_ref,
            to = %range.to_ref,
            "Fetched unreleased commits"
        );
        Ok(subjects.join("\n"))
    }

    fn last_tag(&self) -> String {
        match latest_release_tag(&self.repo) {
            Ok(Some(tag)) => tag,
            Ok(None) => DEFAULT_TAG.to_string(),
            Err(e) => {
                debug!(error = %e, "Could not resolve last tag, using {}", DEFAULT_TAG);
                DEFAULT_TAG.to_string()
            }
        }
    }

    fn project_url(&self) -> Result<String, GitError> {
        project_url(&self.repo)
    }
}
