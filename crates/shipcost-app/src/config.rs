//! Configuration management for shipcost
//!
//! Config stored at: ~/.config/shipcost/config.json

use serde::{Deserialize, Serialize};
use shipcost_infra::DataFiles;
use shipcost_types::{ConfigError, OutputFormat, Result};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the input files (current directory if unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_routes_file")]
    pub routes_file: String,

    /// Fleet tariffs; a `.toml` name switches to the TOML layout
    #[serde(default = "default_fleet_file")]
    pub fleet_file: String,

    #[serde(default = "default_shipments_file")]
    pub shipments_file: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Prefix for money amounts in table output
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Write sample files on startup when inputs are missing
    #[serde(default = "default_true")]
    pub create_samples: bool,
}

fn default_routes_file() -> String {
    "routes.csv".to_string()
}

fn default_fleet_file() -> String {
    "fleet.csv".to_string()
}

fn default_shipments_file() -> String {
    "shipments.csv".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            routes_file: default_routes_file(),
            fleet_file: default_fleet_file(),
            shipments_file: default_shipments_file(),
            output_format: OutputFormat::default(),
            currency_symbol: default_currency_symbol(),
            create_samples: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("shipcost");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn data_files(&self) -> DataFiles {
        let dir = self.data_dir();
        DataFiles {
            routes: dir.join(&self.routes_file),
            fleet: dir.join(&self.fleet_file),
            shipments: dir.join(&self.shipments_file),
        }
    }

    /// Load config from `path`, or use defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Shipcost Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Data dir:       {}", self.data_dir().display())?;
        writeln!(f, "Routes file:    {}", self.routes_file)?;
        writeln!(f, "Fleet file:     {}", self.fleet_file)?;
        writeln!(f, "Shipments file: {}", self.shipments_file)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Currency:       {}", self.currency_symbol)?;
        writeln!(f, "Create samples: {}", self.create_samples)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"fleet_file": "fleet.toml", "output_format": "json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.fleet_file, "fleet.toml");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.routes_file, "routes.csv");
        assert!(config.create_samples);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            currency_symbol: "Rs ".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_data_files_join_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/freight")),
            ..Config::default()
        };
        let files = config.data_files();
        assert_eq!(files.fleet, PathBuf::from("/srv/freight/fleet.csv"));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(shipcost_types::Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
