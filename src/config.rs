//! Process-wide settings for qualifier classification and tree editing.
//!
//! A [`FeatureConfig`] can be built in code, parsed from JSON, or loaded from
//! the file named by the `SEQFEATURES_CONFIG` environment variable. The lazily
//! initialised [`FeatureConfig::global`] instance is what
//! [`Qualifier::new`](crate::data_structs::annotation::Qualifier::new) and
//! [`FeatureStore::new`](crate::data_structs::annotation::FeatureStore::new)
//! use.

use std::path::Path;

use anyhow::Context;
use log::warn;
use once_cell::sync::Lazy;
use serde::{
    Deserialize,
    Serialize,
};

use crate::with_field_fn;

pub const CONFIG_ENV_VAR: &str = "SEQFEATURES_CONFIG";
pub const DEFAULT_DBXREF_SEPARATOR: char = ':';

static GLOBAL_CONFIG: Lazy<FeatureConfig> = Lazy::new(|| {
    match FeatureConfig::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => FeatureConfig::default(),
        Err(e) => {
            warn!("Falling back to default feature config: {:#}", e);
            FeatureConfig::default()
        },
    }
});

/// What [`FeatureStore::attach_child`](crate::data_structs::annotation::FeatureStore::attach_child)
/// does with a child that already has a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReparentPolicy {
    /// Detach the child from its current parent, then attach it.
    #[default]
    Detach,
    /// Refuse with an error.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Qualifier names treated as database cross-references when a qualifier
    /// is built from a name/value pair.
    pub dbxref_aliases:   Vec<String>,
    /// Separator between database name and accession in a cross-reference
    /// value, e.g. `GO:0005515`.
    pub dbxref_separator: char,
    pub reparent:         ReparentPolicy,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            dbxref_aliases:   vec!["db_xref".to_string(), "Dbxref".to_string()],
            dbxref_separator: DEFAULT_DBXREF_SEPARATOR,
            reparent:         ReparentPolicy::default(),
        }
    }
}

impl FeatureConfig {
    with_field_fn!(dbxref_aliases, Vec<String>);

    with_field_fn!(dbxref_separator, char);

    with_field_fn!(reparent, ReparentPolicy);

    /// Shared configuration, loaded once from the environment.
    pub fn global() -> &'static FeatureConfig { &GLOBAL_CONFIG }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Invalid feature config")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).with_context(|| {
            format!("Could not read feature config {}", path.display())
        })?;
        Self::from_json_str(&content)
    }

    /// Reads the config file named by `SEQFEATURES_CONFIG`. Returns `Ok(None)`
    /// if the variable is unset.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(path).map(Some),
            None => Ok(None),
        }
    }

    pub fn is_dbxref_name(
        &self,
        name: &str,
    ) -> bool {
        self.dbxref_aliases
            .iter()
            .any(|alias| alias == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeatureConfig::default();
        assert!(config.is_dbxref_name("db_xref"));
        assert!(config.is_dbxref_name("Dbxref"));
        assert!(!config.is_dbxref_name("gene"));
        assert_eq!(config.dbxref_separator, ':');
        assert_eq!(config.reparent, ReparentPolicy::Detach);
    }

    #[test]
    fn test_partial_json_config() {
        let config =
            FeatureConfig::from_json_str(r#"{"reparent": "reject"}"#).unwrap();
        assert_eq!(config.reparent, ReparentPolicy::Reject);
        assert_eq!(config.dbxref_aliases, FeatureConfig::default().dbxref_aliases);
    }

    #[test]
    fn test_invalid_json_config() {
        assert!(FeatureConfig::from_json_str(r#"{"reparent": "sometimes"}"#).is_err());
    }

    #[test]
    fn test_builder() {
        let config = FeatureConfig::default()
            .with_dbxref_aliases(vec!["xref".into()])
            .with_dbxref_separator('|');
        assert!(config.is_dbxref_name("xref"));
        assert!(!config.is_dbxref_name("db_xref"));
        assert_eq!(config.dbxref_separator, '|');
    }

    #[test]
    fn test_missing_config_file() {
        assert!(FeatureConfig::from_path("/nonexistent/seqfeatures.json").is_err());
    }
}
