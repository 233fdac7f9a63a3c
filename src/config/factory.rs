//! Registry resolving a schema version to a configuration constructor.

use std::collections::HashMap;

use serde_yaml::Value;
use tracing::debug;

use crate::error::ConfigError;

/// Builds one configuration variant from its settings payload.
pub type Constructor<T> = fn(Value) -> Result<T, ConfigError>;

/// Maps schema versions to constructors.
///
/// There is no process-wide instance: production code builds one with its
/// registrations up front and passes it to whatever resolves configs, and
/// tests create their own with [`ConfigFactory::new`].
pub struct ConfigFactory<T> {
    constructors: HashMap<u32, Constructor<T>>,
}

impl<T> ConfigFactory<T> {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a factory pre-loaded with `(version, constructor)` pairs.
    pub fn with_registrations<I>(registrations: I) -> Self
    where
        I: IntoIterator<Item = (u32, Constructor<T>)>,
    {
        let mut factory = Self::new();
        for (version, constructor) in registrations {
            factory.register(version, constructor);
        }
        factory
    }

    /// Register `constructor` for `version`. The last registration wins.
    pub fn register(&mut self, version: u32, constructor: Constructor<T>) {
        if self.constructors.insert(version, constructor).is_some() {
            debug!(version, "replacing registered config constructor");
        }
    }

    pub fn is_registered(&self, version: u32) -> bool {
        self.constructors.contains_key(&version)
    }

    /// Build the variant registered for `version` from `payload`.
    ///
    /// The payload is handed over untouched; shape validation belongs to
    /// the constructor.
    pub fn create(&self, version: u32, payload: Value) -> Result<T, ConfigError> {
        let constructor = self
            .constructors
            .get(&version)
            .ok_or(ConfigError::UnsupportedVersion(version.into()))?;
        constructor(payload)
    }
}

impl<T> Default for ConfigFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}
