//! Upward compaction of row values.
//!
//! After the dense rows are built, values are lifted upward within each
//! column so that stacked rows of the same category fill from the top and
//! short-lived rows collapse into their neighbors where possible.

use crate::rows::Row;

/// Lifts values upward to a fixed point.
///
/// Per column, a value moves from a row into the row directly above it when
/// both rows share a category, the value is nonzero, and the slot above is
/// zero. Values only ever move up, never down and never across columns, so
/// per-column totals are unchanged. A single pass can leave work behind
/// (a slot vacated after the scan already passed it), so passes repeat
/// until nothing moves; `rows * columns` passes always reach the fixed
/// point since each pass advances every blocked value by at least one row.
pub fn lift_up(rows: &mut [Row]) {
    let num_columns = rows.first().map_or(0, |r| r.values.len());
    debug_assert!(rows.iter().all(|r| r.values.len() == num_columns));

    let max_passes = rows.len().saturating_mul(num_columns).max(1);
    for _ in 0..max_passes {
        if !lift_pass(rows, num_columns) {
            break;
        }
    }
}

fn lift_pass(rows: &mut [Row], num_columns: usize) -> bool {
    let mut changed = false;

    for col in 0..num_columns {
        for r in (1..rows.len()).rev() {
            let (upper, lower) = rows.split_at_mut(r);
            let above = &mut upper[r - 1];
            let below = &mut lower[0];

            if above.category == below.category
                && below.values[col] != 0.0
                && above.values[col] == 0.0
            {
                above.values[col] = below.values[col];
                below.values[col] = 0.0;
                changed = true;
            }
        }
    }

    changed
}
