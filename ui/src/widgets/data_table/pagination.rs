//! Pager and page-size selector under the table.

use egui::{Button, ComboBox, Ui};
use holocron_business::query::ITEMS_PER_PAGE_OPTIONS;

/// Snapshot of what the pager needs to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub page_count: u32,
    pub items_per_page: u32,
    pub total_count: u64,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// `(page, items_per_page)` after switching to `items_per_page`, with the
    /// page clamped to the last page at the new size.
    pub fn resized(&self, items_per_page: u32) -> (u32, u32) {
        let per_page = u64::from(items_per_page.max(1));
        let last = u32::try_from(self.total_count.div_ceil(per_page).max(1)).unwrap_or(u32::MAX);
        (self.page.min(last), items_per_page)
    }
}

/// Renders the pager. Returns the new `(page, items_per_page)` when the user
/// changed either one.
pub fn render_pagination(ui: &mut Ui, info: PageInfo, id_salt: &str) -> Option<(u32, u32)> {
    let mut target = None;

    ui.horizontal(|ui| {
        ui.label(format!("Total: {}", info.total_count));
        ui.separator();

        if ui.add_enabled(info.has_prev(), Button::new("« First")).clicked() {
            target = Some((1, info.items_per_page));
        }
        if ui.add_enabled(info.has_prev(), Button::new("‹ Prev")).clicked() {
            target = Some((info.page - 1, info.items_per_page));
        }

        ui.label(format!("Page {} of {}", info.page, info.page_count));

        if ui.add_enabled(info.has_next(), Button::new("Next ›")).clicked() {
            target = Some((info.page + 1, info.items_per_page));
        }
        if ui.add_enabled(info.has_next(), Button::new("Last »")).clicked() {
            target = Some((info.page_count, info.items_per_page));
        }

        ui.separator();
        ui.label("Items per page:");

        let mut selected = info.items_per_page;
        ComboBox::from_id_salt(("items_per_page", id_salt))
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for option in ITEMS_PER_PAGE_OPTIONS {
                    ui.selectable_value(&mut selected, option, option.to_string());
                }
            });
        if selected != info.items_per_page {
            target = Some(info.resized(selected));
        }
    });

    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_disable_navigation() {
        let first = PageInfo {
            page: 1,
            page_count: 3,
            items_per_page: 10,
            total_count: 25,
        };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PageInfo { page: 3, ..first };
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn larger_page_size_clamps_to_last_page() {
        let info = PageInfo {
            page: 9,
            page_count: 9,
            items_per_page: 10,
            total_count: 82,
        };
        assert_eq!(info.resized(25), (4, 25));
        assert_eq!(info.resized(15), (6, 15));

        let early = PageInfo { page: 2, ..info };
        assert_eq!(early.resized(25), (2, 25));

        let empty = PageInfo {
            total_count: 0,
            ..info
        };
        assert_eq!(empty.resized(25), (1, 25));
    }
}
