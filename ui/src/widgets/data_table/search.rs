//! Search box above the table.

use egui::{TextEdit, Ui};

use crate::utils::colors::COLOR_AMBER;

/// Renders the search input. Returns the new text when it was edited this frame.
pub fn render_search(ui: &mut Ui, current: &str, pending: bool, id_salt: &str) -> Option<String> {
    let mut text = current.to_owned();

    let changed = ui
        .horizontal(|ui| {
            ui.label("Search:");
            let response = ui.add(
                TextEdit::singleline(&mut text)
                    .id_salt(("search", id_salt))
                    .hint_text("Search by name")
                    .desired_width(240.0),
            );
            if pending {
                ui.colored_label(COLOR_AMBER, "…");
            }
            response.changed()
        })
        .inner;

    changed.then_some(text)
}
