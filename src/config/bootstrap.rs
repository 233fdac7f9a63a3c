//! Writing a starter config file into a project.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConfigError;

use super::{CONFIG_FILE_NAME, DEFAULT_CONFIG};

/// Outcome of [`create_config_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFileStatus {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write the default config into `folder`, leaving an existing file alone.
pub fn create_config_file(folder: &Path) -> Result<ConfigFileStatus, ConfigError> {
    let path = folder.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Ok(ConfigFileStatus::AlreadyExists(path));
    }

    std::fs::create_dir_all(folder).map_err(|source| ConfigError::WriteFailed {
        path: folder.to_path_buf(),
        source,
    })?;
    std::fs::write(&path, DEFAULT_CONFIG).map_err(|source| ConfigError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "config file created");
    Ok(ConfigFileStatus::Created(path))
}
