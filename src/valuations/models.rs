//! Data models for the valuation pipeline

use crate::Position;
use serde::Serialize;
use std::collections::BTreeMap;

/// One player's cleaned draft valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerValuation {
    pub name: String,
    pub position: Position,
    /// Auction value in whole dollars (the `$` column).
    pub value: u32,
    /// Draft-value bucket, lower is better. Usually whole, but any finite
    /// number sorts.
    pub tier: f64,
    pub points: f64,
    /// Normalized to [0, 1] across every position.
    pub risk: f64,
    /// Retained position-specific columns, keyed by lowercased header.
    pub extra: BTreeMap<String, String>,
}

/// The combined player pool, in QB, RB, WR, TE load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValuationTable {
    /// Column names as they would appear in a flat export of the table.
    pub columns: Vec<String>,
    pub records: Vec<PlayerValuation>,
}

impl ValuationTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn for_position(&self, position: Position) -> impl Iterator<Item = &PlayerValuation> {
        self.records.iter().filter(move |r| r.position == position)
    }
}

/// One row of an exported position sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub name: String,
    #[serde(rename = "$")]
    pub value: u32,
    pub tier: f64,
    pub points: f64,
    pub points_per_dollar: f64,
    pub risk_adjusted_points_per_dollar: f64,
}

/// Ranked sheets for every position, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionRankings {
    pub sheets: Vec<(Position, Vec<RankedPlayer>)>,
}

impl PositionRankings {
    pub fn get(&self, position: Position) -> Option<&[RankedPlayer]> {
        self.sheets
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, rows)| rows.as_slice())
    }
}

/// Per-position line of the run summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSummary {
    pub position: Position,
    pub players: usize,
    pub top: Option<String>,
}

/// What a `process-data` run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessSummary {
    pub output: String,
    pub total_players: usize,
    pub keepers_removed: usize,
    pub per_position: Vec<PositionSummary>,
}
