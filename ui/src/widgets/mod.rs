pub mod data_table;

pub use data_table::{TableEvent, data_table};
