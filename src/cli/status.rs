use super::ui;
use crate::core::{AppConfig, ExchangeDefinition, ExchangeView, enabled_views, evaluate};
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing::debug;

/// Renders the clock line and the table of views to show.
pub fn render(views: &[ExchangeView], show_all: bool, local_clock: &str) -> String {
    let shown: Vec<&ExchangeView> = if show_all {
        views.iter().collect()
    } else {
        enabled_views(views)
    };

    let mut output = format!("{}\n\n", ui::clock_line(local_clock));
    if shown.is_empty() {
        output.push_str(&ui::style_text(
            "No exchanges selected. Use `tradewatch select --all` to enable them.",
            ui::StyleType::Subtle,
        ));
    } else {
        output.push_str(&ui::exchange_table(shown).to_string());
    }
    output
}

pub fn run(
    definitions: &[ExchangeDefinition],
    config: &AppConfig,
    show_all: bool,
    as_json: bool,
) -> Result<()> {
    let views = evaluate(definitions, &config.enabled_set(), Utc::now())?;
    debug!(count = views.len(), "Evaluated exchange status");

    if as_json {
        let shown: Vec<&ExchangeView> = if show_all {
            views.iter().collect()
        } else {
            enabled_views(&views)
        };
        let json = serde_json::to_string_pretty(&shown).context("Failed to serialize status")?;
        println!("{json}");
        return Ok(());
    }

    let local_clock = Local::now().format("%H:%M:%S").to_string();
    println!("{}", render(&views, show_all, &local_clock));
    Ok(())
}
