use super::errors::{Error, Result};
use super::exchange::{ExchangeDefinition, exchange_names};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{debug, warn};

/// Persisted user settings: which exchanges to display.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(rename = "EnabledExchanges", default)]
    pub enabled_exchanges: Vec<String>,
}

impl AppConfig {
    /// Settings with every known exchange enabled.
    pub fn all_enabled(definitions: &[ExchangeDefinition]) -> Self {
        Self {
            enabled_exchanges: exchange_names(definitions),
        }
    }

    pub fn enabled_set(&self) -> HashSet<String> {
        self.enabled_exchanges.iter().cloned().collect()
    }

    pub fn default_config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "tradewatch")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("settings.json"))
    }

    /// Loads settings, never failing: a missing file enables every
    /// exchange, an unreadable or malformed one enables none.
    pub fn load_from_path<P: AsRef<Path>>(path: P, definitions: &[ExchangeDefinition]) -> Self {
        match Self::read_from_path(path.as_ref()) {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!(path = %path.as_ref().display(), "No settings file, enabling all exchanges");
                Self::all_enabled(definitions)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unusable settings file");
                Self::default()
            }
        }
    }

    /// Reads settings from `path`; `Ok(None)` when the file does not exist.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        let config_str = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::PersistenceRead {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };

        let config: Self =
            serde_json::from_str(&config_str).map_err(|e| Error::PersistenceRead {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
        debug!(
            enabled = config.enabled_exchanges.len(),
            "Successfully loaded settings"
        );
        Ok(Some(config))
    }

    /// Overwrites `path` with the pretty-printed settings.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source: io::Error| Error::PersistenceWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(io::Error::from)
            .map_err(write_error)?;
        fs::write(path, json).map_err(write_error)?;

        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exchange::builtin_exchanges;
    use tempfile::TempDir;

    #[test]
    fn test_config_deserialization() {
        let json_str = r#"
{
  "EnabledExchanges": [
    "London Stock Exchange (LSE)",
    "Tokyo Stock Exchange (TSE)"
  ]
}
"#;
        let config: AppConfig = serde_json::from_str(json_str).expect("Failed to deserialize");
        assert_eq!(config.enabled_exchanges.len(), 2);
        assert_eq!(config.enabled_exchanges[0], "London Stock Exchange (LSE)");

        let empty: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.enabled_exchanges.is_empty());
    }

    #[test]
    fn test_missing_file_enables_all() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        assert!(AppConfig::read_from_path(&path).unwrap().is_none());

        let config = AppConfig::load_from_path(&path, builtin_exchanges());
        assert_eq!(config.enabled_exchanges, exchange_names(builtin_exchanges()));
    }

    #[test]
    fn test_malformed_file_enables_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        match AppConfig::read_from_path(&path) {
            Err(err @ Error::PersistenceRead { .. }) => {
                let source = std::error::Error::source(&err).expect("parse error kept as source");
                assert!(source.downcast_ref::<serde_json::Error>().is_some());
            }
            other => panic!("Expected persistence read error, got {other:?}"),
        }

        let config = AppConfig::load_from_path(&path, builtin_exchanges());
        assert!(config.enabled_set().is_empty());
    }

    #[test]
    fn test_save_and_reload() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("settings.json");

        let config = AppConfig {
            enabled_exchanges: vec![
                "Tokyo Stock Exchange (TSE)".to_string(),
                "New York Stock Exchange (NYSE)".to_string(),
            ],
        };
        config.save_to_path(&path)?;

        let content = fs::read_to_string(&path)?;
        assert!(content.contains("\"EnabledExchanges\""));
        assert!(content.contains('\n'), "settings should be pretty-printed");

        let reloaded = AppConfig::load_from_path(&path, builtin_exchanges());
        assert_eq!(reloaded.enabled_set(), config.enabled_set());
        Ok(())
    }

    #[test]
    fn test_unknown_names_survive_round_trip() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("settings.json");

        let config = AppConfig {
            enabled_exchanges: vec!["Moon Exchange".to_string()],
        };
        config.save_to_path(&path)?;

        let reloaded = AppConfig::read_from_path(&path)?.expect("settings file exists");
        assert_eq!(reloaded, config);
        Ok(())
    }

    #[test]
    fn test_save_failure_is_persistence_write_error() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        // A directory where the file should be makes the write fail
        let path = temp_dir.path().join("settings.json");
        fs::create_dir(&path)?;

        let result = AppConfig::default().save_to_path(&path);
        assert!(matches!(result, Err(Error::PersistenceWrite { .. })));
        Ok(())
    }
}
