//! Loading and cleaning of the positional valuation files.
//!
//! Each file is read on its own and stamped with its position. Rows are then
//! concatenated in QB, RB, WR, TE order, column names are lowercased, the `$`
//! column is parsed, unused columns are dropped and `risk` is min-max
//! normalized over the whole combined pool.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    config::SourcePaths,
    error::DraftError,
    valuations::models::{PlayerValuation, ValuationTable},
    Position, Result,
};

/// Columns every valuation file must carry (after lowercasing).
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name", "$", "tier", "points", "risk", "dynasty", "markers", "bye week",
];

/// Columns removed from the combined table.
pub const DROPPED_COLUMNS: [&str; 3] = ["dynasty", "markers", "bye week"];

pub const POSITION_COLUMN: &str = "position";

const CORE_COLUMNS: [&str; 5] = ["name", "$", "tier", "points", "risk"];

/// A single file as read from disk, before cleaning.
#[derive(Debug)]
struct RawFrame {
    path: PathBuf,
    position: Position,
    headers: Vec<String>,
    rows: Vec<csv::StringRecord>,
}

impl RawFrame {
    fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }
}

/// Column index lookups resolved once per file.
struct CoreIndex {
    name: usize,
    value: usize,
    tier: usize,
    points: usize,
    risk: usize,
}

/// Load all four positional files into one cleaned table.
pub fn load_data(sources: &SourcePaths) -> Result<ValuationTable> {
    let mut frames = Vec::with_capacity(Position::ALL.len());
    for position in Position::ALL {
        let frame = read_frame(sources.for_position(position), position)?;
        info!(
            "Read {} {} rows from {}",
            frame.rows.len(),
            position,
            frame.path.display()
        );
        frames.push(frame);
    }

    let columns = combined_columns(&frames);

    let mut records = Vec::with_capacity(frames.iter().map(|f| f.rows.len()).sum());
    for frame in &frames {
        clean_frame(frame, &mut records)?;
    }

    normalize_risk(&mut records)?;
    debug!("Combined table has {} rows and columns {:?}", records.len(), columns);

    Ok(ValuationTable { columns, records })
}

fn read_frame(path: &Path, position: Position) -> Result<RawFrame> {
    let file = File::open(path).map_err(|e| DraftError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DraftError::csv(path, e))?
        .iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DraftError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| DraftError::csv(path, e))?;

    Ok(RawFrame {
        path: path.to_path_buf(),
        position,
        headers,
        rows,
    })
}

/// Union of every file's columns in first-seen order, minus the replaced
/// ones, with `position` always last.
fn combined_columns(frames: &[RawFrame]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for header in frames.iter().flat_map(|f| f.headers.iter()) {
        if is_replaced_column(header) || columns.contains(header) {
            continue;
        }
        columns.push(header.clone());
    }
    columns.push(POSITION_COLUMN.to_string());
    columns
}

/// Dropped columns, plus any `position` column a file carries itself (the
/// stamped position replaces it).
fn is_replaced_column(header: &str) -> bool {
    header == POSITION_COLUMN || DROPPED_COLUMNS.contains(&header)
}

fn clean_frame(frame: &RawFrame, records: &mut Vec<PlayerValuation>) -> Result<()> {
    // Presence was checked in read_frame.
    let lookup = |column: &str| {
        frame
            .column_index(column)
            .ok_or_else(|| DraftError::MissingColumn {
                path: frame.path.clone(),
                column: column.to_string(),
            })
    };
    let index = CoreIndex {
        name: lookup("name")?,
        value: lookup("$")?,
        tier: lookup("tier")?,
        points: lookup("points")?,
        risk: lookup("risk")?,
    };

    for (i, row) in frame.rows.iter().enumerate() {
        let row_number = i + 1;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_value = cell(index.value);
        let value = parse_dollar_value(raw_value).ok_or_else(|| DraftError::InvalidValue {
            path: frame.path.clone(),
            row: row_number,
            raw: raw_value.to_string(),
        })?;

        let invalid_number = |column: &str, raw: &str| DraftError::InvalidNumber {
            path: frame.path.clone(),
            row: row_number,
            column: column.to_string(),
            raw: raw.to_string(),
        };

        let raw_tier = cell(index.tier);
        let tier = parse_finite(raw_tier).ok_or_else(|| invalid_number("tier", raw_tier))?;
        let raw_points = cell(index.points);
        let points = parse_finite(raw_points).ok_or_else(|| invalid_number("points", raw_points))?;
        let raw_risk = cell(index.risk);
        let risk = parse_finite(raw_risk).ok_or_else(|| invalid_number("risk", raw_risk))?;

        let extra = frame
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !CORE_COLUMNS.contains(&h.as_str()) && !is_replaced_column(h))
            .map(|(idx, h)| (h.clone(), cell(idx).to_string()))
            .collect();

        records.push(PlayerValuation {
            name: cell(index.name).to_string(),
            position: frame.position,
            value,
            tier,
            points,
            risk,
            extra,
        });
    }

    Ok(())
}

/// Parse a currency-formatted auction value such as `"$23"` into `23`.
///
/// Returns `None` for non-numeric text and for zero.
pub fn parse_dollar_value(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    digits.parse::<u32>().ok().filter(|v| *v > 0)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Min-max normalize `risk` in place over every record, regardless of
/// position.
pub fn normalize_risk(records: &mut [PlayerValuation]) -> Result<()> {
    if records.is_empty() {
        return Err(DraftError::NoPlayers);
    }

    let (min, max) = records
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(r.risk), hi.max(r.risk))
        });

    let span = max - min;
    if span <= 0.0 {
        return Err(DraftError::DegenerateRisk { min, max });
    }

    for record in records.iter_mut() {
        record.risk = (record.risk - min) / span;
    }
    debug!("Normalized risk over {} players (min {}, max {})", records.len(), min, max);

    Ok(())
}
