//! Commit range resolution.

use git2::{Oid, Repository};
use tracing::debug;

use crate::error::GitError;

/// Resolved commit range with start and end OIDs.
#[derive(Debug, Clone)]
pub struct CommitRange {
    pub from: Oid,
    pub to: Oid,
    pub from_ref: String,
    pub to_ref: String,
}

/// Resolve both ends of a `start..end` range.
pub fn resolve_range(repo: &Repository, start: &str, end: &str) -> Result<CommitRange, GitError> {
    let from = resolve_reference(repo, start)?;
    let to = resolve_reference(repo, end)?;
    debug!(%from, %to, start, end, "resolved commit range");

    Ok(CommitRange {
        from,
        to,
        from_ref: start.to_string(),
        to_ref: end.to_string(),
    })
}

/// Resolve a reference (tag, branch, commit hash or revspec) to a commit OID.
pub fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    let object = repo
        .revparse_single(reference)
        .map_err(|e| GitError::ReferenceNotFound(reference.to_string(), e))?;

    Ok(object.peel_to_commit().map_err(GitError::ParseCommit)?.id())
}
