//! Store configuration
//!
//! Only sizing hints live here; the store has no other tunables.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a [`GraphConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Node slots reserved up front
    pub initial_node_capacity: usize,
    /// Edge slots reserved up front
    pub initial_edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            initial_node_capacity: 1024,
            initial_edge_capacity: 4096,
        }
    }
}

impl GraphConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.initial_node_capacity, 1024);
        assert_eq!(config.initial_edge_capacity, 4096);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GraphConfig::from_json_str(r#"{ "initial_node_capacity": 16 }"#).unwrap();
        assert_eq!(config.initial_node_capacity, 16);
        assert_eq!(config.initial_edge_capacity, 4096);

        let empty = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, GraphConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = GraphConfig::from_json_str(r#"{ "max_nodes": 10 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "initial_node_capacity": 8, "initial_edge_capacity": 32 }}"#
        )
        .unwrap();

        let config = GraphConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.initial_node_capacity, 8);
        assert_eq!(config.initial_edge_capacity, 32);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GraphConfig::from_json_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
