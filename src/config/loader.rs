//! Config file discovery and reading.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::ConfigError;

use super::{CONFIG_FILE_NAME, ChangelogConfigFactory, Config};

/// Read a YAML file into an untyped value.
pub fn read_yml_file(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_yaml::from_str(&content).map_err(ConfigError::ParseFailed)?;
    debug!(path = %path.display(), "config file read");
    Ok(value)
}

/// Look for the project config file in `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        info!(path = %path.display(), "found config file");
        Some(path)
    } else {
        debug!(dir = %dir.display(), "no config file found");
        None
    }
}

/// Resolve the config for a run.
///
/// Uses `explicit` when given, else the project config file in `dir`, else
/// the bundled default.
pub fn load_config(
    explicit: Option<&Path>,
    dir: &Path,
    factory: &ChangelogConfigFactory,
) -> Result<Config, ConfigError> {
    match explicit.map(Path::to_path_buf).or_else(|| find_config_file(dir)) {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(&path, factory)
        }
        None => {
            debug!("using bundled default config");
            Config::bundled(factory)
        }
    }
}
