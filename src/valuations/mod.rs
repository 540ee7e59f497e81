//! Valuation pipeline for the draft board
//!
//! - `models`: Data structures
//! - `loader`: Reading, merging and cleaning the positional files
//! - `keepers`: Removing kept players from the pool
//! - `metrics`: Points-per-dollar metrics and per-position ranking
//! - `export`: Writing the ranked sheets to a workbook

pub mod export;
pub mod keepers;
pub mod loader;
pub mod metrics;
pub mod models;

pub use export::{write_workbook, ExportOptions};
pub use keepers::remove_keepers;
pub use loader::load_data;
pub use metrics::{build_rankings, rank_position};
pub use models::*;
