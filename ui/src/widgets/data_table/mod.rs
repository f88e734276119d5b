//! Server-driven data table.
//!
//! The widget only draws what a [`TableController`] holds and turns clicks
//! and keystrokes into [`TableEvent`]s. Events are applied after the frame's
//! UI is built so the controller is never borrowed by two closures at once.
//!
//! - `columns`: column definitions and widths
//! - `header`: sortable header row
//! - `cells`: per-column cell rendering
//! - `pagination`: pager and page-size selector
//! - `search`: debounced search box

mod cells;
pub mod columns;
pub mod header;
pub mod pagination;
pub mod search;

use chrono::{DateTime, Utc};
use egui::{Frame, Margin, Response, RichText, Stroke, Ui};
use egui_extras::TableBuilder;
use holocron_business::TableController;

use crate::utils::colors::{COLOR_RED, COLOR_RED_BG, TABLE_BORDER_COLOR};
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use pagination::{PageInfo, render_pagination};

/// A user interaction collected while drawing the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Search(String),
    Sort(&'static str),
    Options { page: u32, items_per_page: u32 },
}

impl TableEvent {
    pub fn apply(self, table: &mut TableController, now: DateTime<Utc>) {
        match self {
            Self::Search(text) => table.set_search(text, now),
            Self::Sort(column) => table.toggle_sort(column),
            Self::Options {
                page,
                items_per_page,
            } => table.set_options(page, items_per_page),
        }
    }
}

/// Draws the table for `table` and applies whatever the user did this frame.
pub fn data_table(ui: &mut Ui, table: &mut TableController, now: DateTime<Utc>) -> Response {
    let (response, events) = render(ui, table);
    for event in events {
        log::debug!("Table {} event: {event:?}", table.url());
        event.apply(table, now);
    }
    response
}

fn render(ui: &mut Ui, table: &TableController) -> (Response, Vec<TableEvent>) {
    let mut events = Vec::new();
    let id_salt = table.url().to_owned();

    let response = ui
        .vertical(|ui| {
            ui.horizontal(|ui| {
                if let Some(text) =
                    search::render_search(ui, &table.query().search, table.debounce_pending(), &id_salt)
                {
                    events.push(TableEvent::Search(text));
                }
                if table.is_loading() {
                    ui.spinner();
                    ui.label("Loading...");
                }
            });

            if let Some(message) = table.error_message() {
                error_banner(ui, message);
            }

            ui.add_space(6.0);

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::symmetric(4, 4))
                .show(ui, |ui| {
                    let mut builder = TableBuilder::new(ui)
                        .id_salt(("data_table", id_salt.as_str()))
                        .striped(true)
                        .resizable(false)
                        .vscroll(false);
                    for column in table_columns() {
                        builder = builder.column(column);
                    }

                    builder
                        .header(HEADER_HEIGHT, |mut header| {
                            if let Some(key) = header::render_table_header(&mut header, table.query())
                            {
                                events.push(TableEvent::Sort(key));
                            }
                        })
                        .body(|body| {
                            body.rows(ROW_HEIGHT, table.rows().len(), |mut row| {
                                if let Some(item) = table.rows().get(row.index()) {
                                    cells::render_row_cells(&mut row, item);
                                }
                            });
                        });

                    if table.rows().is_empty() && !table.is_loading() {
                        ui.weak("No data available");
                    }
                });

            ui.add_space(6.0);

            let info = PageInfo {
                page: table.query().page(),
                page_count: table.page_count(),
                items_per_page: table.query().items_per_page(),
                total_count: table.total_count(),
            };
            if let Some((page, items_per_page)) = render_pagination(ui, info, &id_salt) {
                events.push(TableEvent::Options {
                    page,
                    items_per_page,
                });
            }
        })
        .response;

    (response, events)
}

fn error_banner(ui: &mut Ui, message: &str) {
    Frame::NONE
        .fill(COLOR_RED_BG)
        .stroke(Stroke::new(1.0, COLOR_RED))
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(message).color(COLOR_RED));
        });
}
