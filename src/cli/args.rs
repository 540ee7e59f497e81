//! CLI argument definitions and parsing structures.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_QB_FILEPATH: &str = "../data/qb_udk.csv";
pub const DEFAULT_RB_FILEPATH: &str = "../data/rb_udk.csv";
pub const DEFAULT_WR_FILEPATH: &str = "../data/wr_udk.csv";
pub const DEFAULT_TE_FILEPATH: &str = "../data/te_udk.csv";
pub const DEFAULT_PROCESSED_FILEPATH: &str = "../data/processed/processed_data.xlsx";

/// Input and output locations plus run options for `process-data`.
#[derive(Debug, Args)]
pub struct ProcessDataArgs {
    /// Filepath to QB data file.
    #[clap(long = "qb_filepath", default_value = DEFAULT_QB_FILEPATH)]
    pub qb_filepath: PathBuf,

    /// Filepath to RB data file.
    #[clap(long = "rb_filepath", default_value = DEFAULT_RB_FILEPATH)]
    pub rb_filepath: PathBuf,

    /// Filepath to WR data file.
    #[clap(long = "wr_filepath", default_value = DEFAULT_WR_FILEPATH)]
    pub wr_filepath: PathBuf,

    /// Filepath to TE data file.
    #[clap(long = "te_filepath", default_value = DEFAULT_TE_FILEPATH)]
    pub te_filepath: PathBuf,

    /// Filepath to store the resulting processed file.
    #[clap(long = "processed_filepath", default_value = DEFAULT_PROCESSED_FILEPATH)]
    pub processed_filepath: PathBuf,

    /// Remove a kept player from the pool (repeatable): `-k "Josh Allen" -k "Bijan Robinson"`.
    #[clap(long = "keeper", short = 'k')]
    pub keepers: Vec<String>,

    /// Create the output directory if it does not exist.
    #[clap(long)]
    pub create_dirs: bool,

    /// Output the run summary as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-draft-values",
    about = "Fantasy football auction draft valuation sheets"
)]
pub struct DraftValues {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load, clean and rank the positional valuation files and save the workbook.
    ///
    /// Reads the QB, RB, WR and TE files, normalizes risk across the whole
    /// player pool, derives points-per-dollar metrics and writes one sheet
    /// per position.
    ProcessData(ProcessDataArgs),
}
