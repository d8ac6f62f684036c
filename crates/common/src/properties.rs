//! Adapter properties.
//!
//! The federated engine hands every adapter a flat, case-sensitive map of
//! string options. This module owns the generic keys; dialect-specific keys
//! are validated by the dialect that declares them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const CONNECTION_NAME_PROPERTY: &str = "CONNECTION_NAME";
pub const CATALOG_NAME_PROPERTY: &str = "CATALOG_NAME";
pub const SCHEMA_NAME_PROPERTY: &str = "SCHEMA_NAME";
pub const IGNORE_ERRORS_PROPERTY: &str = "IGNORE_ERRORS";
pub const SQL_DIALECT_PROPERTY: &str = "SQL_DIALECT";
pub const LOG_LEVEL_PROPERTY: &str = "LOG_LEVEL";

/// Keys every dialect understands.
pub const COMMON_PROPERTIES: &[&str] = &[
    CONNECTION_NAME_PROPERTY,
    CATALOG_NAME_PROPERTY,
    SCHEMA_NAME_PROPERTY,
    IGNORE_ERRORS_PROPERTY,
    SQL_DIALECT_PROPERTY,
    LOG_LEVEL_PROPERTY,
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdapterProperties {
    values: BTreeMap<String, String>,
}

impl AdapterProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn connection_name(&self) -> Option<&str> {
        self.get(CONNECTION_NAME_PROPERTY)
    }

    pub fn catalog_name(&self) -> Option<&str> {
        self.get(CATALOG_NAME_PROPERTY)
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.get(SCHEMA_NAME_PROPERTY)
    }

    /// Entries of the comma-separated `IGNORE_ERRORS` list, trimmed and uppercased.
    pub fn ignored_errors(&self) -> Vec<String> {
        self.get(IGNORE_ERRORS_PROPERTY)
            .map(|raw| {
                raw.split(',')
                    .map(|entry| entry.trim().to_ascii_uppercase())
                    .filter(|entry| !entry.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn ignores(&self, switch: &str) -> bool {
        self.ignored_errors().iter().any(|entry| entry == switch)
    }

    /// Loads properties from a YAML/TOML/JSON file and overlays `PGVS_*`
    /// environment variables. A missing file yields the environment overlay only.
    ///
    /// Keys are normalised to uppercase because the environment source lowercases them.
    pub fn from_file(path: &str) -> Result<Self> {
        let builder = config::Config::builder();

        let builder = if std::path::Path::new(path).exists() {
            builder.add_source(config::File::with_name(path))
        } else {
            builder
        };

        let builder = builder.add_source(config::Environment::with_prefix("PGVS"));

        let cfg = builder
            .build()
            .context("Failed to build adapter properties")?;

        let raw: HashMap<String, String> = cfg
            .try_deserialize()
            .with_context(|| format!("Adapter properties in '{}' must be flat strings", path))?;

        Ok(raw
            .into_iter()
            .map(|(key, value)| (key.to_ascii_uppercase(), value))
            .collect())
    }
}

impl<K, V> FromIterator<(K, V)> for AdapterProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
