use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for exchange status tracking
#[derive(Error, Debug)]
pub enum Error {
    #[error("Exchange configuration is invalid: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to read settings from {path}: {source}")]
    PersistenceRead {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save settings to {path}: {source}")]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),
}

/// Defects in the compiled-in exchange registry. Fatal at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("exchange '{exchange}' uses unresolvable timezone '{timezone}'")]
    UnresolvableTimezone { exchange: String, timezone: String },

    #[error("exchange '{exchange}' closes at or before it opens")]
    InvertedHours { exchange: String },

    #[error("exchange '{0}' is defined more than once")]
    DuplicateName(String),

    #[error("exchange names must not be empty")]
    EmptyName,
}

impl ConfigurationError {
    /// Name of the offending exchange, when there is one.
    pub fn exchange(&self) -> Option<&str> {
        match self {
            ConfigurationError::UnresolvableTimezone { exchange, .. }
            | ConfigurationError::InvertedHours { exchange } => Some(exchange.as_str()),
            ConfigurationError::DuplicateName(name) => Some(name.as_str()),
            ConfigurationError::EmptyName => None,
        }
    }
}
