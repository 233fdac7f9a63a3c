//! Release tag lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use git2::{Oid, Repository, Sort};
use regex_lite::Regex;
use semver::Version;
use tracing::debug;

use crate::error::GitError;

/// Tag reported when a repository has no release tag yet.
pub const DEFAULT_TAG: &str = "v0.0.0";

static RELEASE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(-.*)?$").expect("release tag pattern is valid")
});

/// Whether `name` is a `vMAJOR.MINOR.PATCH[-suffix]` tag whose version
/// part parses as semver.
pub fn is_release_tag(name: &str) -> bool {
    RELEASE_TAG.is_match(name) && Version::parse(&strip_tag_suffix(name)[1..]).is_ok()
}

/// Drop everything from the first `-`, so `v0.1.0-rc.1` becomes `v0.1.0`.
pub fn strip_tag_suffix(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

/// Nearest release tag reachable from `HEAD`, with any suffix stripped.
///
/// When several release tags point at the same commit the highest version
/// wins.
pub fn latest_release_tag(repo: &Repository) -> Result<Option<String>, GitError> {
    let head = repo
        .head()
        .map_err(|e| GitError::ReferenceNotFound("HEAD".to_string(), e))?;
    let head_oid = head.peel_to_commit().map_err(GitError::ParseCommit)?.id();

    let tags_by_commit = release_tags_by_commit(repo)?;
    if tags_by_commit.is_empty() {
        debug!("No release tags found in repository");
        return Ok(None);
    }

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head_oid).map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    for oid in revwalk {
        let oid = oid.map_err(GitError::RevwalkError)?;
        if let Some(candidates) = tags_by_commit.get(&oid) {
            let latest = candidates
                .iter()
                .map(|name| strip_tag_suffix(name))
                .max_by_key(|name| Version::parse(&name[1..]).ok());
            if let Some(tag) = latest {
                debug!(tag, "Found latest reachable release tag");
                return Ok(Some(tag.to_string()));
            }
        }
    }

    Ok(None)
}

/// Release tags grouped by the commit they point at.
fn release_tags_by_commit(repo: &Repository) -> Result<HashMap<Oid, Vec<String>>, GitError> {
    let mut tags: HashMap<Oid, Vec<String>> = HashMap::new();

    repo.tag_foreach(|oid, name_bytes| {
        let Ok(full_name) = std::str::from_utf8(name_bytes) else {
            debug!(%oid, "Skipping tag with non UTF-8 name");
            return true;
        };
        let name = full_name.strip_prefix("refs/tags/").unwrap_or(full_name);

        if is_release_tag(name) {
            // Annotated tags point at a tag object; peel to the commit.
            let target = repo
                .find_tag(oid)
                .map(|tag| tag.target_id())
                .unwrap_or(oid);
            tags.entry(target).or_default().push(name.to_string());
        }
        true
    })
    .map_err(GitError::RevwalkError)?;

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_release_tag() {
        assert!(is_release_tag("v1.2.3"));
        assert!(is_release_tag("v0.1.0-extra"));
        assert!(!is_release_tag("1.2.3"));
        assert!(!is_release_tag("v1.2"));
        assert!(!is_release_tag("v1foo.0.0"));
        assert!(!is_release_tag("nightly-2026-02-05"));
    }

    #[test]
    fn test_is_release_tag_rejects_unparseable_versions() {
        assert!(!is_release_tag("v1.02.0"));
        assert!(!is_release_tag("v01.2.0"));
        assert!(!is_release_tag("v1.2.99999999999999999999"));
        assert!(is_release_tag("v0.10.0"));
    }

    #[test]
    fn test_strip_tag_suffix() {
        assert_eq!(strip_tag_suffix("v0.1.0-extra"), "v0.1.0");
        assert_eq!(strip_tag_suffix("v0.1.0-rc-2"), "v0.1.0");
        assert_eq!(strip_tag_suffix("v0.1.0"), "v0.1.0");
    }
}
