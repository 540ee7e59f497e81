//! Removal of players already kept on another roster.

use std::collections::HashMap;

use tracing::info;

use crate::{error::DraftError, valuations::models::ValuationTable, Result};

/// Remove `keepers` from the draft pool.
///
/// Every keeper name must match exactly one record. Unknown names and names
/// shared by several players fail with [`DraftError::InvalidKeepers`], as
/// does listing the same keeper twice. Remaining rows keep their order.
pub fn remove_keepers(keepers: &[String], table: ValuationTable) -> Result<ValuationTable> {
    if keepers.is_empty() {
        return Ok(table);
    }

    let mut requested: HashMap<&str, usize> = HashMap::new();
    for keeper in keepers {
        *requested.entry(keeper.as_str()).or_default() += 1;
    }

    let invalid = {
        let mut matches: HashMap<&str, usize> = HashMap::new();
        for record in &table.records {
            *matches.entry(record.name.as_str()).or_default() += 1;
        }

        let mut invalid: Vec<String> = Vec::new();
        for keeper in keepers {
            let found = matches.get(keeper.as_str()).copied().unwrap_or(0);
            let listed = requested[keeper.as_str()];
            if (found != 1 || listed != 1) && !invalid.contains(keeper) {
                invalid.push(keeper.clone());
            }
        }
        invalid
    };
    if !invalid.is_empty() {
        return Err(DraftError::InvalidKeepers { names: invalid });
    }

    let before = table.records.len();
    let ValuationTable { columns, records } = table;
    let records: Vec<_> = records
        .into_iter()
        .filter(|r| !requested.contains_key(r.name.as_str()))
        .collect();
    info!("Removed {} keepers from the pool", before - records.len());

    Ok(ValuationTable { columns, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{valuations::models::PlayerValuation, Position};

    fn table_of(names: &[&str]) -> ValuationTable {
        ValuationTable {
            columns: vec!["name".to_string(), "position".to_string()],
            records: names
                .iter()
                .enumerate()
                .map(|(i, name)| PlayerValuation {
                    name: name.to_string(),
                    position: Position::ALL[i % 4],
                    value: 10 + i as u32,
                    tier: 1.0,
                    points: 100.0,
                    risk: 0.5,
                    extra: Default::default(),
                })
                .collect(),
        }
    }

    fn names(table: &ValuationTable) -> Vec<&str> {
        table.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_remove_two_of_ten() {
        let table = table_of(&[
            "P0", "P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9",
        ]);
        let keepers = vec!["P3".to_string(), "P7".to_string()];

        let result = remove_keepers(&keepers, table).unwrap();
        assert_eq!(result.len(), 8);
        assert_eq!(names(&result), vec!["P0", "P1", "P2", "P4", "P5", "P6", "P8", "P9"]);
        assert_eq!(result.columns, vec!["name", "position"]);
    }

    #[test]
    fn test_unknown_keeper_is_rejected() {
        let table = table_of(&["P0", "P1", "P2"]);
        let keepers = vec!["P1".to_string(), "Nobody".to_string()];

        match remove_keepers(&keepers, table).unwrap_err() {
            DraftError::InvalidKeepers { names } => assert_eq!(names, vec!["Nobody"]),
            other => panic!("Expected InvalidKeepers, got {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_keeper_is_rejected() {
        let table = table_of(&["Mike Williams", "P1", "Mike Williams"]);
        let keepers = vec!["Mike Williams".to_string()];

        let err = remove_keepers(&keepers, table).unwrap_err();
        assert!(err.to_string().starts_with("Invalid keepers submitted"));
    }

    #[test]
    fn test_duplicate_keeper_is_rejected() {
        let table = table_of(&["P0", "P1"]);
        let keepers = vec!["P0".to_string(), "P0".to_string()];

        match remove_keepers(&keepers, table).unwrap_err() {
            DraftError::InvalidKeepers { names } => assert_eq!(names, vec!["P0"]),
            other => panic!("Expected InvalidKeepers, got {other:?}"),
        }
    }

    #[test]
    fn test_no_keepers_is_identity() {
        let table = table_of(&["P0", "P1"]);
        let result = remove_keepers(&[], table.clone()).unwrap();
        assert_eq!(result, table);
    }
}
