//! Error types for cutejoe modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading and resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported configuration version: {0}")]
    UnsupportedVersion(i64),

    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] serde_yaml::Error),

    #[error("Invalid settings for configuration version {version}: {source}")]
    InvalidPayload {
        version: u32,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Kind '{0}' is declared more than once")]
    DuplicateKind(String),

    #[error("Label '{label}' is declared by both kind '{first}' and kind '{second}'")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to read remote '{0}': {1}")]
    RemoteFailed(String, #[source] git2::Error),
}

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),
}

/// Errors from changelog generation and persistence.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error(transparent)]
    Source(#[from] GitError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Failed to write changelog {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
