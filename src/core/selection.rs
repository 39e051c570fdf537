//! Checkbox model for choosing which exchanges to display

use super::config::AppConfig;
use super::errors::{Error, Result};
use super::exchange::ExchangeDefinition;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub name: String,
    pub checked: bool,
}

/// Pending selection; nothing is persisted until [`Selection::confirm`].
#[derive(Debug, Clone)]
pub struct Selection {
    entries: Vec<SelectionEntry>,
}

impl Selection {
    pub fn new(definitions: &[ExchangeDefinition], enabled: &HashSet<String>) -> Self {
        let entries = definitions
            .iter()
            .map(|d| SelectionEntry {
                name: d.name.clone(),
                checked: enabled.contains(&d.name),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Checks or unchecks an exchange. Names match case-insensitively.
    pub fn set(&mut self, name: &str, checked: bool) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownExchange(name.to_string()))?;
        entry.checked = checked;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.entries.iter_mut().for_each(|e| e.checked = true);
    }

    pub fn clear_all(&mut self) {
        self.entries.iter_mut().for_each(|e| e.checked = false);
    }

    /// Settings holding the checked exchanges in registry order.
    pub fn confirm(&self) -> AppConfig {
        AppConfig {
            enabled_exchanges: self
                .entries
                .iter()
                .filter(|e| e.checked)
                .map(|e| e.name.clone())
                .collect(),
        }
    }
}
