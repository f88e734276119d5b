//! SWAPI upstream: fetching, validating and ordering result pages.

mod client;
pub mod sort;

pub use client::{ListParams, SwapiClient};
pub use sort::{Direction, sort_items};
