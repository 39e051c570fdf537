use super::{status, ui};
use crate::core::{AppConfig, ExchangeDefinition, ExchangeView, evaluate};
use anyhow::Result;
use chrono::{Local, Utc};
use console::Term;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// True when `views` differs from the last drawn frame, or nothing was drawn yet.
pub fn needs_redraw(last: Option<&[ExchangeView]>, views: &[ExchangeView]) -> bool {
    last != Some(views)
}

fn limit_reached(refreshes: u64, max_refreshes: Option<u64>) -> bool {
    max_refreshes.is_some_and(|max| refreshes >= max)
}

/// Re-evaluates every second until Ctrl-C, or until `max_refreshes` ticks.
///
/// The table is redrawn only when a view changed; on a terminal the clock
/// line is updated in place on every tick.
pub async fn run(
    definitions: &[ExchangeDefinition],
    config: &AppConfig,
    max_refreshes: Option<u64>,
) -> Result<()> {
    let enabled = config.enabled_set();
    let term = Term::stdout();
    let interactive = term.is_term();

    let mut interval = tokio::time::interval(REFRESH_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut last_views: Option<Vec<ExchangeView>> = None;
    let mut drawn_lines = 0;
    let mut refreshes = 0u64;

    info!("Watching {} exchanges", enabled.len());
    while !limit_reached(refreshes, max_refreshes) {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut ctrl_c => {
                debug!("Interrupted, stopping watch");
                break;
            }
        }

        let views = evaluate(definitions, &enabled, Utc::now())?;
        let local_clock = Local::now().format("%H:%M:%S").to_string();

        if needs_redraw(last_views.as_deref(), &views) {
            debug!("Exchange status changed, redrawing");
            let frame = status::render(&views, false, &local_clock);
            if interactive {
                term.clear_screen()?;
                term.write_line(&frame)?;
                drawn_lines = frame.lines().count();
            } else {
                println!("{frame}");
            }
            last_views = Some(views);
        } else if interactive {
            term.move_cursor_to(0, 0)?;
            term.clear_line()?;
            term.write_str(&ui::clock_line(&local_clock))?;
            term.move_cursor_to(0, drawn_lines)?;
        }

        refreshes += 1;
    }

    Ok(())
}
