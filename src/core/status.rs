//! Open/closed status of exchanges at a given instant

use super::errors::Result;
use super::exchange::ExchangeDefinition;
use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::Serialize;
use std::collections::HashSet;

/// Display record for one exchange, rebuilt on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeView {
    pub name: String,
    pub local_time: String,
    pub hours_label: String,
    pub is_open: bool,
    pub is_enabled: bool,
}

impl ExchangeView {
    pub fn status_text(&self) -> &'static str {
        if self.is_open { "Open" } else { "Closed" }
    }
}

/// Computes the view of every definition at `now_utc`, in registry order.
///
/// An exchange is open on weekdays (local time) between its opening and
/// closing time, both inclusive. Saturday and Sunday are always closed.
pub fn evaluate(
    definitions: &[ExchangeDefinition],
    enabled_names: &HashSet<String>,
    now_utc: DateTime<Utc>,
) -> Result<Vec<ExchangeView>> {
    definitions
        .iter()
        .map(|definition| {
            let tz = definition.timezone()?;
            let local = now_utc.with_timezone(&tz);
            let time_of_day = local.time();
            let is_weekend = matches!(local.weekday(), Weekday::Sat | Weekday::Sun);
            let is_open =
                !is_weekend && time_of_day >= definition.open && time_of_day <= definition.close;

            Ok(ExchangeView {
                name: definition.name.clone(),
                local_time: local.format("%H:%M").to_string(),
                hours_label: definition.hours_label(),
                is_open,
                is_enabled: enabled_names.contains(&definition.name),
            })
        })
        .collect()
}

/// Views to show on the display, registry order preserved.
pub fn enabled_views(views: &[ExchangeView]) -> Vec<&ExchangeView> {
    views.iter().filter(|v| v.is_enabled).collect()
}
