//! Semver increment logic driven by change kinds.

use semver::Version;
use serde::Deserialize;

use crate::error::VersionError;

/// How a kind of change affects the next release tag.
///
/// Variants are declared from highest to lowest severity, so the derived
/// ordering ranks `Major < Minor < Patch` and the minimum is the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemverLevel {
    Major,
    Minor,
    Patch,
}

impl SemverLevel {
    /// Index of the tag component this level increments (0 = major).
    pub fn position(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

/// Pick the most severe level, defaulting to a patch bump.
///
/// A release with no signalling kinds still bumps patch.
pub fn highest_level<I>(levels: I) -> SemverLevel
where
    I: IntoIterator<Item = SemverLevel>,
{
    levels.into_iter().min().unwrap_or(SemverLevel::Patch)
}

/// Increment `base` at `level`, zeroing every less severe component.
pub fn apply_bump(base: &Version, level: SemverLevel) -> Version {
    match level {
        SemverLevel::Major => Version::new(base.major + 1, 0, 0),
        SemverLevel::Minor => Version::new(base.major, base.minor + 1, 0),
        SemverLevel::Patch => Version::new(base.major, base.minor, base.patch + 1),
    }
}

/// Parse a `vMAJOR.MINOR.PATCH` tag. The `v` prefix is optional.
pub fn parse_tag(tag: &str) -> Result<Version, VersionError> {
    let raw = tag.strip_prefix('v').unwrap_or(tag);
    Version::parse(raw).map_err(|e| VersionError::ParseFailed(tag.to_string(), e))
}

/// Format a version as a release tag.
pub fn format_tag(version: &Version) -> String {
    format!("v{}.{}.{}", version.major, version.minor, version.patch)
}
