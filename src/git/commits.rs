//! Commit subject listing.

use git2::{Oid, Repository, Sort};

use crate::error::GitError;

/// Subject lines of commits reachable from `to` but not from `from`,
/// newest first.
pub fn commit_subjects(repo: &Repository, from: Oid, to: Oid) -> Result<Vec<String>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    revwalk.push(to).map_err(GitError::RevwalkError)?;
    revwalk.hide(from).map_err(GitError::RevwalkError)?;

    let mut subjects = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        subjects.push(commit.summary().unwrap_or_default().to_string());
    }

    Ok(subjects)
}
