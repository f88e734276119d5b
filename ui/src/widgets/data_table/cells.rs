//! Cell rendering for data table rows.

use egui::{RichText, Ui};
use holocron_business::DisplayRow;

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: Option<u64>) {
    let text = id.map_or_else(|| "-".to_owned(), |id| id.to_string());
    ui.label(RichText::new(text).monospace());
}

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

/// The date is formatted once when the result set arrives; this only draws it.
#[inline]
pub fn render_created_cell(ui: &mut Ui, created: &str) {
    ui.label(RichText::new(created).monospace());
}

pub fn render_row_cells(row: &mut egui_extras::TableRow<'_, '_>, item: &DisplayRow) {
    row.col(|ui| render_id_cell(ui, item.id));
    row.col(|ui| render_name_cell(ui, item.name()));
    row.col(|ui| render_created_cell(ui, &item.created));
}
