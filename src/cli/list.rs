use super::ui;
use crate::core::{ExchangeDefinition, Selection};
use comfy_table::{Cell, Table};

/// Every known exchange with its zone, hours and whether it is displayed.
pub fn selection_table(definitions: &[ExchangeDefinition], selection: &Selection) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Shown"),
        ui::header_cell("Exchange"),
        ui::header_cell("Timezone"),
        ui::header_cell("Hours"),
    ]);

    for (definition, entry) in definitions.iter().zip(selection.entries()) {
        table.add_row(vec![
            ui::checkbox_cell(entry.checked),
            Cell::new(&definition.name),
            Cell::new(&definition.timezone_id),
            Cell::new(definition.hours_label()),
        ]);
    }
    table
}

pub fn run(definitions: &[ExchangeDefinition], selection: &Selection) {
    println!("{}", selection_table(definitions, selection));
}
