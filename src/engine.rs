//! The table-building pipeline.

use chrono::NaiveDate;

use crate::aggregate::AggregateSeries;
use crate::calendar::build_columns;
use crate::grouping::{group_by_submission, SubmissionGroup};
use crate::lift::lift_up;
use crate::presentation::{assemble, BalanceTable};
use crate::rows::{build_rows, Row};
use crate::schema::{Category, Transaction};

/// Builds the weekly balance table from expanded transactions.
///
/// Returns `None` when there are no transactions at all, the "no data yet"
/// state. Otherwise the pipeline runs in a fixed order: derive the column
/// span from every transaction date, build per-submission rows with the
/// income section first, lift values upward across the whole row set,
/// compute the aggregate lines from the still-unfiltered rows, then filter
/// and sort for presentation.
///
/// Rows built from the `income` slice are always labeled and categorized as
/// income regardless of what the transactions carry; spending rows take the
/// category of their group's first transaction.
pub fn build_balance_table(
    income: &[Transaction],
    spending: &[Transaction],
) -> Option<BalanceTable> {
    let dates: Vec<NaiveDate> = income.iter().chain(spending).map(|t| t.date).collect();
    let columns = build_columns(&dates)?;

    let mut rows: Vec<Row> = Vec::new();
    for (idx, group) in group_by_submission(income).iter().enumerate() {
        rows.extend(build_rows(
            &group.transactions,
            idx + 1,
            Category::Income,
            &columns,
        ));
    }
    for (idx, group) in group_by_submission(spending).iter().enumerate() {
        rows.extend(build_rows(
            &group.transactions,
            idx + 1,
            group_category(group),
            &columns,
        ));
    }

    lift_up(&mut rows);

    let totals = AggregateSeries::from_rows(&rows, columns.len());

    log::debug!(
        "built {} columns, {} rows from {} income / {} spending transactions",
        columns.len(),
        rows.len(),
        income.len(),
        spending.len()
    );

    Some(assemble(columns, rows, totals))
}

fn group_category(group: &SubmissionGroup) -> Category {
    group
        .transactions
        .first()
        .map_or(Category::Other, |t| t.category)
}
