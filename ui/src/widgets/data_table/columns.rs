//! Column definitions for the data table.

use egui_extras::Column;

pub const ID_WIDTH: f32 = 60.0;
pub const CREATED_WIDTH: f32 = 150.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 26.0;

/// A sortable column: header label plus the `sortBy` key sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub label: &'static str,
    pub key: &'static str,
}

/// Columns in display order.
pub const COLUMNS: [ColumnDef; 3] = [
    ColumnDef {
        label: "ID",
        key: "id",
    },
    ColumnDef {
        label: "Name",
        key: "name",
    },
    ColumnDef {
        label: "Created",
        key: "created",
    },
];

/// Table column layout matching [`COLUMNS`]:
/// - ID (fixed)
/// - Name (flexible, fills remaining space)
/// - Created (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::remainder().at_least(120.0),
        Column::exact(CREATED_WIDTH),
    ]
}
