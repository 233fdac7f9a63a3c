//! Changelog settings and their versioned variants.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;
use crate::version::SemverLevel;

use super::factory::{ConfigFactory, Constructor};

/// Read-only view over a resolved changelog configuration.
///
/// Every schema version implements this, so the changelog engine never
/// depends on a concrete variant.
pub trait ChangelogSettings: fmt::Debug {
    /// Schema version this variant was built from.
    fn schema_version(&self) -> u32;

    /// Folder generated changelog files are written to.
    fn folder(&self) -> &str;

    /// Revision the commit scan starts after.
    fn start(&self) -> &str;

    /// Revision the commit scan ends at.
    fn end(&self) -> &str;

    fn default_title(&self) -> &str;

    /// Section title for `kind`, or the default title for unknown kinds.
    fn title(&self, kind: &str) -> &str;

    /// Semver impact of `kind`, if it is known and declares one.
    fn version_level(&self, kind: &str) -> Option<SemverLevel>;

    /// Kind whose labels contain `label` (exact, case-sensitive match).
    fn kind(&self, label: &str) -> Option<&str>;
}

/// Factory resolving changelog settings by schema version.
pub type ChangelogConfigFactory = ConfigFactory<Box<dyn ChangelogSettings>>;

/// Factory with every supported changelog schema registered.
pub fn changelog_config_factory() -> ChangelogConfigFactory {
    ConfigFactory::with_registrations([(
        ChangelogConfigV1::SCHEMA_VERSION,
        ChangelogConfigV1::boxed as Constructor<_>,
    )])
}

/// One kind of change: the labels that select it, its heading and its
/// semver impact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindConfig {
    #[serde(default)]
    pub labels: Vec<String>,
    pub title: String,
    #[serde(default)]
    pub version: Option<SemverLevel>,
}

/// Kinds in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kinds(Vec<(String, KindConfig)>);

impl Kinds {
    pub fn new(kinds: Vec<(String, KindConfig)>) -> Self {
        Self(kinds)
    }

    pub fn get(&self, key: &str) -> Option<&KindConfig> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, kind)| kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KindConfig)> {
        self.0.iter().map(|(k, kind)| (k.as_str(), kind))
    }

    /// Reject repeated kind keys and labels claimed by more than one kind.
    fn validate(&self) -> Result<(), ConfigError> {
        for (index, (key, kind)) in self.0.iter().enumerate() {
            let earlier = &self.0[..index];

            if earlier.iter().any(|(k, _)| k == key) {
                return Err(ConfigError::DuplicateKind(key.clone()));
            }

            for label in &kind.labels {
                if let Some((first, _)) = earlier.iter().find(|(_, k)| k.labels.contains(label)) {
                    return Err(ConfigError::DuplicateLabel {
                        label: label.clone(),
                        first: first.clone(),
                        second: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Kinds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KindsVisitor;

        impl<'de> Visitor<'de> for KindsVisitor {
            type Value = Kinds;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of kind keys to kind settings")
            }

            fn visit_unit<E>(self) -> Result<Kinds, E>
            where
                E: de::Error,
            {
                Ok(Kinds::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Kinds, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut kinds = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, kind)) = map.next_entry::<String, KindConfig>()? {
                    kinds.push((key, kind));
                }
                Ok(Kinds(kinds))
            }
        }

        deserializer.deserialize_any(KindsVisitor)
    }
}

fn default_folder() -> String {
    "changelogs".to_string()
}

fn default_start() -> String {
    "master".to_string()
}

fn default_end() -> String {
    "HEAD".to_string()
}

fn default_title() -> String {
    "Uncategorized".to_string()
}

/// Schema version 1 of the changelog settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfigV1 {
    #[serde(default = "default_folder")]
    pub folder: String,
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
    #[serde(default = "default_title")]
    pub default_title: String,
    #[serde(default)]
    pub kinds: Kinds,
}

impl ChangelogConfigV1 {
    pub const SCHEMA_VERSION: u32 = 1;

    /// Build from the `changelog:` section of a config file.
    ///
    /// A null payload means every setting takes its default.
    pub fn from_payload(payload: Value) -> Result<Self, ConfigError> {
        let payload = match payload {
            Value::Null => Value::Mapping(Mapping::new()),
            other => other,
        };

        let config: Self =
            serde_yaml::from_value(payload).map_err(|source| ConfigError::InvalidPayload {
                version: Self::SCHEMA_VERSION,
                source,
            })?;
        config.kinds.validate()?;

        Ok(config)
    }

    fn boxed(payload: Value) -> Result<Box<dyn ChangelogSettings>, ConfigError> {
        Ok(Box::new(Self::from_payload(payload)?))
    }
}

impl Default for ChangelogConfigV1 {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            start: default_start(),
            end: default_end(),
            default_title: default_title(),
            kinds: Kinds::default(),
        }
    }
}

impl ChangelogSettings for ChangelogConfigV1 {
    fn schema_version(&self) -> u32 {
        Self::SCHEMA_VERSION
    }

    fn folder(&self) -> &str {
        &self.folder
    }

    fn start(&self) -> &str {
        &self.start
    }

    fn end(&self) -> &str {
        &self.end
    }

    fn default_title(&self) -> &str {
        &self.default_title
    }

    fn title(&self, kind: &str) -> &str {
        self.kinds
            .get(kind)
            .map(|k| k.title.as_str())
            .unwrap_or(&self.default_title)
    }

    fn version_level(&self, kind: &str) -> Option<SemverLevel> {
        self.kinds.get(kind).and_then(|k| k.version)
    }

    fn kind(&self, label: &str) -> Option<&str> {
        self.kinds
            .iter()
            .find(|(_, kind)| kind.labels.iter().any(|l| l == label))
            .map(|(key, _)| key)
    }
}
