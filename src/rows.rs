//! Dense row construction from one submission's transactions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::Column;
use crate::schema::{Category, Transaction};

/// Largest column-index gap bridged within one row. A value landing more
/// than this many columns after the previous occupied column opens a new
/// row instead of stretching the old one across a long run of zeros.
pub const GAP_THRESHOLD: usize = 10;

/// One labeled table row, dense over the column sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub category: Category,
    pub values: Vec<f64>,
}

impl Row {
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Builds the dense rows for one submission group.
///
/// Every transaction is accumulated into every column whose interval
/// contains its date; a transaction matching no column contributes nothing.
/// Occupied columns are then walked in index order and chained into rows,
/// starting a new row whenever the next occupied index is more than
/// [`GAP_THRESHOLD`] past the previous one. `group_ordinal` is the 1-based
/// position of the submission within its section and feeds the row label.
pub fn build_rows(
    transactions: &[Transaction],
    group_ordinal: usize,
    category: Category,
    columns: &[Column],
) -> Vec<Row> {
    let mut by_column: BTreeMap<usize, f64> = BTreeMap::new();
    for tx in transactions {
        for (idx, column) in columns.iter().enumerate() {
            if column.contains(tx.date) {
                *by_column.entry(idx).or_insert(0.0) += tx.amount;
            }
        }
    }

    let mut segments: Vec<Vec<(usize, f64)>> = Vec::new();
    let mut prev: Option<usize> = None;

    for (&idx, &amount) in &by_column {
        if prev.map_or(true, |p| idx > p + GAP_THRESHOLD) {
            segments.push(Vec::new());
        }
        if let Some(segment) = segments.last_mut() {
            segment.push((idx, amount));
        }
        prev = Some(idx);
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(row_idx, segment)| {
            let mut values = vec![0.0; columns.len()];
            for (idx, amount) in segment {
                values[idx] = amount;
            }
            Row {
                label: row_label(category, group_ordinal, row_idx + 1),
                category,
                values,
            }
        })
        .collect()
}

/// `Income #<group>.<row>` for income, `Spent #<group>.<row> (<category>)`
/// for everything else.
fn row_label(category: Category, group_ordinal: usize, row_ordinal: usize) -> String {
    if category.is_income() {
        format!("Income #{}.{}", group_ordinal, row_ordinal)
    } else {
        format!("Spent #{}.{} ({})", group_ordinal, row_ordinal, category)
    }
}
