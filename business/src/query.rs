//! Query State: everything that determines the next fetch.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Column used for sorting until the user picks another one.
pub const DEFAULT_SORT_KEY: &str = "name";

/// Rows per page shown by the pager until the user picks another size.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Page sizes offered by the pager.
pub const ITEMS_PER_PAGE_OPTIONS: [u32; 3] = [10, 15, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable query state owned by a table controller.
///
/// `items_per_page` only drives the pager; the server decides its own page
/// size, so it never goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    page: u32,
    pub sort_by: Ustr,
    pub order: SortOrder,
    items_per_page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            sort_by: Ustr::from(DEFAULT_SORT_KEY),
            order: SortOrder::Desc,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl QueryState {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Pages are 1-based; 0 is clamped to the first page.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn set_items_per_page(&mut self, items_per_page: u32) {
        self.items_per_page = items_per_page.max(1);
    }

    /// Snapshot of the state in its wire form.
    pub fn params(&self) -> QueryParams {
        QueryParams {
            search: self.search.clone(),
            page: self.page,
            sort_by: self.sort_by.as_str().to_string(),
            order: self.order,
        }
    }
}

/// Query parameters sent with every fetch: `search`, `page`, `sortBy`, `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub search: String,
    pub page: u32,
    pub sort_by: String,
    pub order: SortOrder,
}

impl QueryParams {
    /// Ordered key/value pairs for the query string.
    pub fn pairs(&self) -> [(&'static str, String); 4] {
        [
            ("search", self.search.clone()),
            ("page", self.page.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("order", self.order.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_initial_fetch() {
        let params = QueryState::default().params();

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "search": "",
                "page": 1,
                "sortBy": "name",
                "order": "desc"
            })
        );
    }

    #[test]
    fn page_zero_is_clamped() {
        let mut state = QueryState::default();
        state.set_page(0);
        assert_eq!(state.page(), 1);

        state.set_page(7);
        assert_eq!(state.page(), 7);
    }

    #[test]
    fn items_per_page_is_not_sent() {
        let mut state = QueryState::default();
        let before = state.params();
        state.set_items_per_page(25);

        assert_eq!(state.params(), before);
        assert_eq!(state.items_per_page(), 25);
    }

    #[test]
    fn pairs_keep_wire_names() {
        let mut state = QueryState::default();
        state.search = "luke".to_string();
        state.order = SortOrder::Asc;

        let pairs = state.params().pairs();
        assert_eq!(pairs[0], ("search", "luke".to_string()));
        assert_eq!(pairs[1], ("page", "1".to_string()));
        assert_eq!(pairs[2], ("sortBy", "name".to_string()));
        assert_eq!(pairs[3], ("order", "asc".to_string()));
    }

    #[test]
    fn sort_order_flips() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
    }
}
