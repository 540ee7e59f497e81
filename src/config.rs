//! Explicit run configuration passed to the loader and exporter.

use std::path::PathBuf;

use crate::{
    cli::args::{
        ProcessDataArgs, DEFAULT_PROCESSED_FILEPATH, DEFAULT_QB_FILEPATH, DEFAULT_RB_FILEPATH,
        DEFAULT_TE_FILEPATH, DEFAULT_WR_FILEPATH,
    },
    Position,
};

/// One valuation file per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub qb: PathBuf,
    pub rb: PathBuf,
    pub wr: PathBuf,
    pub te: PathBuf,
}

impl SourcePaths {
    /// Path of the file that holds `position`'s players.
    pub fn for_position(&self, position: Position) -> &PathBuf {
        match position {
            Position::QB => &self.qb,
            Position::RB => &self.rb,
            Position::WR => &self.wr,
            Position::TE => &self.te,
        }
    }
}

/// Everything a `process-data` run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub qb_path: PathBuf,
    pub rb_path: PathBuf,
    pub wr_path: PathBuf,
    pub te_path: PathBuf,
    pub output_path: PathBuf,
    /// Create missing parent directories of `output_path`.
    pub create_output_dirs: bool,
    /// Players to remove before ranking. Empty skips keeper removal.
    pub keepers: Vec<String>,
}

impl ProcessConfig {
    pub fn sources(&self) -> SourcePaths {
        SourcePaths {
            qb: self.qb_path.clone(),
            rb: self.rb_path.clone(),
            wr: self.wr_path.clone(),
            te: self.te_path.clone(),
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            qb_path: PathBuf::from(DEFAULT_QB_FILEPATH),
            rb_path: PathBuf::from(DEFAULT_RB_FILEPATH),
            wr_path: PathBuf::from(DEFAULT_WR_FILEPATH),
            te_path: PathBuf::from(DEFAULT_TE_FILEPATH),
            output_path: PathBuf::from(DEFAULT_PROCESSED_FILEPATH),
            create_output_dirs: false,
            keepers: Vec::new(),
        }
    }
}

impl From<&ProcessDataArgs> for ProcessConfig {
    fn from(args: &ProcessDataArgs) -> Self {
        Self {
            qb_path: args.qb_filepath.clone(),
            rb_path: args.rb_filepath.clone(),
            wr_path: args.wr_filepath.clone(),
            te_path: args.te_filepath.clone(),
            output_path: args.processed_filepath.clone(),
            create_output_dirs: args.create_dirs,
            keepers: args.keepers.clone(),
        }
    }
}
