use crate::core::ExchangeView;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Success,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Success => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Open in green, closed in red.
pub fn status_cell(view: &ExchangeView) -> Cell {
    let color = if view.is_open { Color::Green } else { Color::Red };
    Cell::new(view.status_text())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

/// Table of exchange views, one row per view in the given order.
pub fn exchange_table<'a>(views: impl IntoIterator<Item = &'a ExchangeView>) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Exchange"),
        header_cell("Local Time"),
        header_cell("Hours"),
        header_cell("Status"),
    ]);

    for view in views {
        table.add_row(vec![
            Cell::new(&view.name),
            Cell::new(&view.local_time).set_alignment(CellAlignment::Center),
            Cell::new(&view.hours_label).set_alignment(CellAlignment::Center),
            status_cell(view),
        ]);
    }
    table
}

/// Creates a cell showing a checkbox mark.
pub fn checkbox_cell(checked: bool) -> Cell {
    let (mark, color) = if checked {
        ("[x]", Color::Green)
    } else {
        ("[ ]", Color::DarkGrey)
    };
    Cell::new(mark)
        .fg(color)
        .set_alignment(CellAlignment::Center)
}

/// Line shown above the table with the machine's own clock.
pub fn clock_line(local_time: &str) -> String {
    format!("Local time: {}", style(local_time).bold())
}
