use std::collections::HashMap;
use std::fmt;

use crate::catalog::ItemKind;
use crate::errors::Error;

use super::lines::{AggregationKey, DraftLine};

/// Merges duplicate receipt lines into a canonical batch.
///
/// Rows with no item chosen are dropped first. Remaining rows are grouped
/// by [`AggregationKey`]; quantities are summed and every other field is
/// taken from the first row seen for that key. Output order is the order
/// in which keys were first seen.
pub fn aggregate(lines: &[DraftLine]) -> Result<Vec<DraftLine>, Error> {
    let mut merged: Vec<DraftLine> = Vec::new();
    let mut index: HashMap<AggregationKey, usize> = HashMap::new();

    for line in lines {
        let Some(key) = line.key() else {
            // Unfinished row, must never reach the remote system
            continue;
        };

        if line.quantity == 0 {
            return Err(Error::Validation {
                message: format!("quantity must be at least 1 for item {}", key.item_id),
            });
        }

        match index.get(&key) {
            Some(&at) => merged[at].quantity += line.quantity,
            None => {
                index.insert(key, merged.len());
                merged.push(line.clone());
            }
        }
    }

    Ok(merged)
}

/// Splits an aggregated batch into the per-collaborator submission for
/// one item kind.
pub fn split_by_kind(lines: &[DraftLine], kind: ItemKind) -> Vec<DraftLine> {
    lines
        .iter()
        .filter(|line| line.kind == kind)
        .cloned()
        .collect()
}

/// Human-readable size of one submission batch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BatchSummary {
    pub unique_items: usize,
    pub total_units: u64,
}

impl BatchSummary {
    pub fn of(lines: &[DraftLine]) -> Self {
        Self {
            unique_items: lines.len(),
            total_units: lines.iter().map(|line| u64::from(line.quantity)).sum(),
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unique items, {} total units",
            self.unique_items, self.total_units
        )
    }
}
