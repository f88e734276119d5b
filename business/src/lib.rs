//! Domain layer for Holocron tables: query state, fetching and formatting.
//!
//! Nothing in here depends on the UI toolkit; `holocron-ui` renders what the
//! [`TableController`] exposes and forwards user events back into it.

mod config;
pub mod debounce;
pub mod format;
pub mod http;
pub mod query;
pub mod row;
pub mod table;
pub mod table_api;
mod task;
mod time;

pub use config::BusinessConfig;
pub use debounce::Debouncer;
pub use format::{DateFormatter, SharedFormatter, ShortDateTime, default_formatter};
pub use query::{QueryParams, QueryState, SortOrder};
pub use row::{ResultSet, Row};
pub use table::{DisplayRow, TableController};
pub use table_api::{FetchError, HttpTableApi, TableApi};
pub use time::Time;
