//! Versioned configuration.
//!
//! A config file carries a top-level `version` that selects which variant
//! parses each section. Resolution goes through a [`ConfigFactory`], so new
//! schema versions only need a new registration.

pub mod bootstrap;
pub mod changelog;
pub mod factory;
pub mod loader;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::ConfigError;

pub use bootstrap::{ConfigFileStatus, create_config_file};
pub use changelog::{
    ChangelogConfigFactory, ChangelogConfigV1, ChangelogSettings, KindConfig, Kinds,
    changelog_config_factory,
};
pub use factory::{ConfigFactory, Constructor};
pub use loader::{find_config_file, load_config, read_yml_file};

/// Name of a project's config file.
pub const CONFIG_FILE_NAME: &str = ".cutejoe.yml";

/// Configuration shipped with the binary, used when a project has none.
pub const DEFAULT_CONFIG: &str = include_str!(".default_config.yml");

/// Location of the bundled default configuration.
pub fn get_default_file_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("config")
        .join(".default_config.yml")
}

#[derive(Deserialize)]
struct RawConfig {
    version: i64,
    #[serde(default)]
    changelog: Value,
}

/// A resolved configuration file.
#[derive(Debug)]
pub struct Config {
    version: u32,
    changelog: Box<dyn ChangelogSettings>,
}

impl Config {
    /// Resolve parsed YAML into concrete settings.
    pub fn from_value(value: Value, factory: &ChangelogConfigFactory) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_value(value).map_err(ConfigError::ParseFailed)?;
        let version =
            u32::try_from(raw.version).map_err(|_| ConfigError::UnsupportedVersion(raw.version))?;
        let changelog = factory.create(version, raw.changelog)?;

        Ok(Self {
            version,
            changelog,
        })
    }

    pub fn from_yaml_str(content: &str, factory: &ChangelogConfigFactory) -> Result<Self, ConfigError> {
        let value = serde_yaml::from_str(content).map_err(ConfigError::ParseFailed)?;
        Self::from_value(value, factory)
    }

    /// Load and resolve a config file.
    pub fn load(path: &Path, factory: &ChangelogConfigFactory) -> Result<Self, ConfigError> {
        Self::from_value(read_yml_file(path)?, factory)
    }

    /// The bundled default configuration.
    pub fn bundled(factory: &ChangelogConfigFactory) -> Result<Self, ConfigError> {
        Self::from_yaml_str(DEFAULT_CONFIG, factory)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn changelog(&self) -> &dyn ChangelogSettings {
        self.changelog.as_ref()
    }
}
