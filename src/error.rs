//! Error types for the draft valuation pipeline

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing failed in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column {column:?} in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid dollar value {raw:?} in {} (row {row}): expected a positive whole number", path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        raw: String,
    },

    #[error("Invalid {column:?} value {raw:?} in {} (row {row})", path.display())]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: String,
        raw: String,
    },

    #[error("Player {name:?} has a $0 value; points per dollar is undefined")]
    ZeroValue { name: String },

    #[error("No players found in any valuation file")]
    NoPlayers,

    #[error("Cannot normalize risk: min ({min}) equals max ({max})")]
    DegenerateRisk { min: f64, max: f64 },

    #[error("Invalid keepers submitted: {}", names.join(", "))]
    InvalidKeepers { names: Vec<String> },

    #[error("Output directory {} does not exist (pass --create-dirs to create it)", path.display())]
    OutputDirMissing { path: PathBuf },
}

impl DraftError {
    /// Wrap an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DraftError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a CSV error with the file being read.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        DraftError::Csv {
            path: path.into(),
            source,
        }
    }
}
