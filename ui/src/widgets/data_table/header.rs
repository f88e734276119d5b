//! Sortable header row for the data table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use holocron_business::{QueryState, SortOrder};

use super::columns::{COLUMNS, ColumnDef};

/// Header label with an arrow on the active sort column.
pub fn header_label(column: &ColumnDef, query: &QueryState) -> String {
    if query.sort_by.as_str() != column.key {
        return column.label.to_owned();
    }
    match query.order {
        SortOrder::Asc => format!("{} ▲", column.label),
        SortOrder::Desc => format!("{} ▼", column.label),
    }
}

/// Renders the header row. Returns the key of the clicked column, if any.
pub fn render_table_header(header: &mut TableRow<'_, '_>, query: &QueryState) -> Option<&'static str> {
    let mut clicked = None;
    for column in &COLUMNS {
        header.col(|ui| {
            if render_header_cell(ui, column, query) {
                clicked = Some(column.key);
            }
        });
    }
    clicked
}

#[inline]
fn render_header_cell(ui: &mut Ui, column: &ColumnDef, query: &QueryState) -> bool {
    let text = RichText::new(header_label(column, query)).strong();
    ui.add(Button::new(text).frame(false))
        .on_hover_text(format!("Sort by {}", column.label))
        .clicked()
}
