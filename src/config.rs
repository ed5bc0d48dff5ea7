//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::diagram::DiagramType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub diagram: DiagramConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Diagram generation settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiagramConfig {
    /// Layout token emitted in the `flowchart` header (LR, TD, ...)
    #[serde(default, rename = "type")]
    pub diagram_type: DiagramType,

    /// Default output file; stdout when unset
    pub output: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./fsm-flowchart.toml
    /// 2. ~/.fsm-flowchart/config.toml
    /// 3. /etc/fsm-flowchart/config.toml
    pub fn load() -> Result<Self> {
        let mut paths = vec![PathBuf::from("fsm-flowchart.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".fsm-flowchart").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/fsm-flowchart/config.toml"));

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.diagram.diagram_type.as_str(), "LR");
        assert!(config.diagram.output.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[diagram]
type = "TD"
output = "machine.mmd"

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.diagram.diagram_type.as_str(), "TD");
        assert_eq!(config.diagram.output, Some(PathBuf::from("machine.mmd")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[logging]\nlevel = \"info\"\n").unwrap();
        assert_eq!(config.diagram.diagram_type, DiagramType::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[diagram]\ntype = \"BT\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.diagram.diagram_type.as_str(), "BT");
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/fsm-flowchart.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
