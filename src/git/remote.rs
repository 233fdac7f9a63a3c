//! Remote URL lookup and normalization.

use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::error::GitError;

/// Remote whose URL identifies the project.
pub const DEFAULT_REMOTE: &str = "origin";

/// Browsable HTTPS URL of the `origin` remote, or an empty string when the
/// repository has no such remote.
pub fn project_url(repo: &Repository) -> Result<String, GitError> {
    let remote = match repo.find_remote(DEFAULT_REMOTE) {
        Ok(remote) => remote,
        Err(e) if e.code() == ErrorCode::NotFound => {
            debug!(remote = DEFAULT_REMOTE, "No remote configured");
            return Ok(String::new());
        }
        Err(e) => return Err(GitError::RemoteFailed(DEFAULT_REMOTE.to_string(), e)),
    };

    Ok(remote.url().map(normalize_remote_url).unwrap_or_default())
}

/// Turn a clone URL into a browsable HTTPS URL.
///
/// `git@host:owner/repo.git` and `ssh://git@host/owner/repo.git` both become
/// `https://host/owner/repo`. HTTPS URLs lose credentials, a trailing `.git`
/// and trailing slashes.
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.trim();

    let https = if let Some(rest) = url.strip_prefix("ssh://") {
        format!("https://{}", strip_userinfo(rest))
    } else if let Some(rest) = url.strip_prefix("https://") {
        format!("https://{}", strip_userinfo(rest))
    } else if let Some((host, path)) = scp_like(url) {
        format!("https://{}/{}", host, path)
    } else {
        url.to_string()
    };

    let trimmed = https.trim_end_matches('/');
    trimmed.strip_suffix(".git").unwrap_or(trimmed).to_string()
}

/// Split `user@host:path` into host and path.
fn scp_like(url: &str) -> Option<(&str, &str)> {
    if url.contains("://") {
        return None;
    }
    let (user_host, path) = url.split_once(':')?;
    let host = user_host.rsplit_once('@').map_or(user_host, |(_, host)| host);
    Some((host, path))
}

/// Drop `user[:password]@` from the authority of `host/path`.
fn strip_userinfo(rest: &str) -> &str {
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => &rest[at + 1..],
        None => rest,
    }
}
