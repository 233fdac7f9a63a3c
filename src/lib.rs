//! cutejoe - A CLI tool that generates release changelogs from labelled commits.
//!
//! # Overview
//!
//! cutejoe reads commit subjects written as `label: message`, groups them by
//! the kind each label maps to, picks the next semver tag from the most
//! severe kind present, and renders a Markdown changelog with a comparison
//! link against the previous release.

pub mod changelog;
pub mod config;
pub mod error;
pub mod git;
pub mod version;

// Re-export commonly used types
pub use changelog::{Changelog, GroupedCommits};
pub use config::{ChangelogSettings, Config, ConfigFactory};
pub use error::{ChangelogError, ConfigError, GitError, VersionError};
pub use git::{CommitSource, GitCommitSource};
pub use version::SemverLevel;
