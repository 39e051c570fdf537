use crate::core::{AppConfig, ExchangeDefinition, validate_registry};
use anyhow::{Context, Result};
use std::path::Path;

/// Creates a settings file with every exchange enabled at the default location
pub fn setup(definitions: &[ExchangeDefinition]) -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(&path, definitions)
}

/// Creates a settings file with every exchange enabled at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P, definitions: &[ExchangeDefinition]) -> Result<()> {
    let path = path.as_ref();
    validate_registry(definitions)?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    AppConfig::all_enabled(definitions)
        .save_to_path(path)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
