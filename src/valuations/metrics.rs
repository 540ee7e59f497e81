//! Value metrics and per-position rankings.

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    error::DraftError,
    valuations::models::{PlayerValuation, PositionRankings, RankedPlayer, ValuationTable},
    Position, Result,
};

/// Round to three decimal places, halves away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Projected points per auction dollar, rounded to three decimals.
pub fn points_per_dollar(record: &PlayerValuation) -> Result<f64> {
    if record.value == 0 {
        return Err(DraftError::ZeroValue {
            name: record.name.clone(),
        });
    }
    Ok(round3(record.points / f64::from(record.value)))
}

/// Build an export row with both derived metrics.
pub fn rank_row(record: &PlayerValuation) -> Result<RankedPlayer> {
    let ppd = points_per_dollar(record)?;
    Ok(RankedPlayer {
        name: record.name.clone(),
        value: record.value,
        tier: record.tier,
        points: record.points,
        points_per_dollar: ppd,
        risk_adjusted_points_per_dollar: round3(ppd * record.risk),
    })
}

/// Tier ascending, then risk-adjusted points per dollar descending.
fn ranking_order(a: &RankedPlayer, b: &RankedPlayer) -> Ordering {
    a.tier.total_cmp(&b.tier).then_with(|| {
        b.risk_adjusted_points_per_dollar
            .total_cmp(&a.risk_adjusted_points_per_dollar)
    })
}

/// Ranked sheet rows for one position. Ties keep load order.
pub fn rank_position(table: &ValuationTable, position: Position) -> Result<Vec<RankedPlayer>> {
    let mut rows = table
        .for_position(position)
        .map(rank_row)
        .collect::<Result<Vec<_>>>()?;

    // sort_by is stable
    rows.sort_by(ranking_order);
    debug!("Ranked {} {} players", rows.len(), position);

    Ok(rows)
}

/// Ranked sheets for QB, RB, WR and TE, in that order.
pub fn build_rankings(table: &ValuationTable) -> Result<PositionRankings> {
    let sheets = Position::ALL
        .iter()
        .map(|&position| rank_position(table, position).map(|rows| (position, rows)))
        .collect::<Result<Vec<_>>>()?;

    Ok(PositionRankings { sheets })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(
        name: &str,
        position: Position,
        value: u32,
        tier: f64,
        points: f64,
        risk: f64,
    ) -> PlayerValuation {
        PlayerValuation {
            name: name.to_string(),
            position,
            value,
            tier,
            points,
            risk,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(10.0), 10.0);
        assert_eq!(round3(0.0004), 0.0);
        assert_eq!(round3(2.0 / 3.0), 0.667);
    }

    #[test]
    fn test_points_per_dollar_metrics() {
        let record = player("A. Rodgers", Position::QB, 30, 1.0, 300.0, 0.5);
        let row = rank_row(&record).unwrap();

        assert_eq!(row.points_per_dollar, 10.0);
        assert_eq!(row.risk_adjusted_points_per_dollar, 5.0);
        assert_eq!(row.value, 30);
        assert_eq!(row.tier, 1.0);
    }

    #[test]
    fn test_risk_adjusted_uses_rounded_ppd() {
        // 100 / 3 = 33.333..., rounded first, then scaled
        let record = player("B", Position::RB, 3, 1.0, 100.0, 0.3333);
        let row = rank_row(&record).unwrap();

        assert_eq!(row.points_per_dollar, 33.333);
        assert_eq!(row.risk_adjusted_points_per_dollar, round3(33.333 * 0.3333));
    }

    #[test]
    fn test_zero_value_is_error() {
        let record = player("Free Agent", Position::WR, 0, 9.0, 40.0, 0.1);
        match points_per_dollar(&record).unwrap_err() {
            DraftError::ZeroValue { name } => assert_eq!(name, "Free Agent"),
            other => panic!("Expected ZeroValue, got {other:?}"),
        }
    }

    #[test]
    fn test_rank_position_orders_by_tier_then_metric() {
        let table = ValuationTable {
            columns: Vec::new(),
            records: vec![
                player("T2 low", Position::RB, 10, 2.0, 100.0, 0.2),
                player("T1 low", Position::RB, 10, 1.0, 100.0, 0.1),
                player("QB", Position::QB, 10, 1.0, 100.0, 1.0),
                player("T1 high", Position::RB, 10, 1.0, 100.0, 0.9),
                player("T2 high", Position::RB, 10, 2.0, 100.0, 0.8),
            ],
        };

        let rows = rank_position(&table, Position::RB).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["T1 high", "T1 low", "T2 high", "T2 low"]);
    }

    #[test]
    fn test_fractional_tiers_sort_between_whole_tiers() {
        let table = ValuationTable {
            columns: Vec::new(),
            records: vec![
                player("tier 2", Position::WR, 10, 2.0, 100.0, 0.5),
                player("tier 1.5", Position::WR, 10, 1.5, 100.0, 0.5),
                player("tier 1", Position::WR, 10, 1.0, 100.0, 0.5),
            ],
        };

        let rows = rank_position(&table, Position::WR).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["tier 1", "tier 1.5", "tier 2"]);
    }

    #[test]
    fn test_rank_position_is_stable() {
        let table = ValuationTable {
            columns: Vec::new(),
            records: vec![
                player("first", Position::TE, 5, 3.0, 50.0, 0.5),
                player("second", Position::TE, 5, 3.0, 50.0, 0.5),
                player("third", Position::TE, 5, 3.0, 50.0, 0.5),
            ],
        };

        let rows = rank_position(&table, Position::TE).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_build_rankings_sheet_order() {
        let table = ValuationTable {
            columns: Vec::new(),
            records: vec![
                player("te", Position::TE, 5, 1.0, 50.0, 0.5),
                player("qb", Position::QB, 5, 1.0, 50.0, 0.5),
            ],
        };

        let rankings = build_rankings(&table).unwrap();
        let order: Vec<_> = rankings.sheets.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, Position::ALL.to_vec());
        assert!(rankings.get(Position::RB).unwrap().is_empty());
        assert_eq!(rankings.get(Position::TE).unwrap()[0].name, "te");
    }
}
