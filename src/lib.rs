pub mod cli;
pub mod core;

use crate::cli::select::SelectionChange;
use crate::core::AppConfig;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

pub enum AppCommand {
    Status { all: bool, json: bool },
    Watch { count: Option<u64> },
    List,
    Select(SelectionChange),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Tradewatch starting...");

    let definitions = crate::core::builtin_exchanges();
    crate::core::validate_registry(definitions)?;

    let config_path = match config_path {
        Some(path) => PathBuf::from(path),
        None => AppConfig::default_config_path()?,
    };
    let config = AppConfig::load_from_path(&config_path, definitions);
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Status { all, json } => cli::status::run(definitions, &config, all, json),
        AppCommand::Watch { count } => cli::watch::run(definitions, &config, count).await,
        AppCommand::List => {
            let selection = crate::core::Selection::new(definitions, &config.enabled_set());
            cli::list::run(definitions, &selection);
            Ok(())
        }
        AppCommand::Select(change) => {
            cli::select::run(definitions, &config, &change, &config_path).map(|_| ())
        }
    }
}
