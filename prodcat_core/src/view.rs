//! Everything between the catalog and the screen: the state the user drives,
//! the filter and sort applied to the catalog, and the render model.

pub mod config;
pub mod filter;
pub mod render;
pub mod sort;
pub mod state;

pub use config::{test_id, Column, COLUMNS, NO_MATCHING_MESSAGE};
pub use filter::ProductFilter;
pub use render::{render, TableView};
pub use sort::{SortBy, SortColumn, SortOrder};
pub use state::{TableAction, TableState};
