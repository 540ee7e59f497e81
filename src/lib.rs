//! Fantasy Football Draft Valuation Library
//!
//! Turns positional auction-value exports (one CSV each for QB, RB, WR and TE)
//! into a ranked draft board workbook.
//!
//! ## Features
//!
//! - **Loading & Cleaning**: Merge the four files, parse `$` values, drop unused columns
//! - **Global Risk Scaling**: Min-max normalize risk across the entire player pool
//! - **Keeper Removal**: Validate and remove players kept by other teams
//! - **Value Metrics**: Points per dollar and risk-adjusted points per dollar
//! - **Workbook Export**: One ranked sheet per position, written atomically
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_draft_values::{commands::process_data::run_process_data, ProcessConfig};
//!
//! # fn example() -> ffl_draft_values::Result<()> {
//! let config = ProcessConfig {
//!     keepers: vec!["Josh Allen".to_string()],
//!     create_output_dirs: true,
//!     ..ProcessConfig::default()
//! };
//!
//! let summary = run_process_data(&config)?;
//! println!("{} players ranked", summary.total_players);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod valuations;

// Re-export commonly used types
pub use cli::types::position::Position;
pub use config::{ProcessConfig, SourcePaths};
pub use error::{DraftError, Result};
pub use valuations::{PlayerValuation, RankedPlayer, ValuationTable};
