use super::{list, ui};
use crate::core::{AppConfig, ExchangeDefinition, Selection};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Edits requested on the command line. `all`/`none` apply before the
/// individual toggles.
#[derive(Debug, Clone, Default)]
pub struct SelectionChange {
    pub all: bool,
    pub none: bool,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
}

impl SelectionChange {
    pub fn is_empty(&self) -> bool {
        !self.all && !self.none && self.enable.is_empty() && self.disable.is_empty()
    }

    pub fn apply(&self, selection: &mut Selection) -> Result<()> {
        if self.all {
            selection.select_all();
        }
        if self.none {
            selection.clear_all();
        }
        for name in &self.enable {
            selection.set(name, true)?;
        }
        for name in &self.disable {
            selection.set(name, false)?;
        }
        Ok(())
    }
}

/// Applies `change`, saves the result to `config_path` and shows the new
/// selection. Returns the settings in effect for this session.
///
/// A failed save is reported but not fatal: the returned settings still
/// carry the new selection.
pub fn run(
    definitions: &[ExchangeDefinition],
    current: &AppConfig,
    change: &SelectionChange,
    config_path: &Path,
) -> Result<AppConfig> {
    let mut selection = Selection::new(definitions, &current.enabled_set());

    if change.is_empty() {
        list::run(definitions, &selection);
        return Ok(current.clone());
    }

    change.apply(&mut selection)?;
    let confirmed = selection.confirm();

    let effective = match confirmed.save_to_path(config_path) {
        Ok(()) => {
            info!(path = %config_path.display(), "Saved exchange selection");
            println!(
                "{}",
                ui::style_text("Selection saved.", ui::StyleType::Success)
            );
            AppConfig::load_from_path(config_path, definitions)
        }
        Err(e) => {
            warn!(error = %e, "Selection applied for this session only");
            eprintln!(
                "{}",
                ui::style_text(&format!("Could not save selection: {e}"), ui::StyleType::Error)
            );
            confirmed
        }
    };

    let shown = Selection::new(definitions, &effective.enabled_set());
    list::run(definitions, &shown);
    Ok(effective)
}
