//! Final table assembly and display naming.

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateSeries;
use crate::calendar::Column;
use crate::rows::Row;

/// English month name for a 0-based month index, `"Unknown"` out of range.
pub fn month_name(month0: u32) -> &'static str {
    match month0 {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

/// Short ordinal for a week-in-month position: `1st` through `6th` from the
/// table, `"{n}th"` for anything else.
pub fn ordinal_label(week: u32) -> String {
    match week {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        4 => "4th".to_string(),
        5 => "5th".to_string(),
        6 => "6th".to_string(),
        n => format!("{}th", n),
    }
}

/// One month header spanning a contiguous run of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub year: i32,
    /// 0-based month, same convention as [`Column::month`].
    pub month: u32,
    /// Number of consecutive columns under this header.
    pub span: usize,
}

impl MonthGroup {
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Collapses the column sequence into contiguous month headers.
pub fn month_groups(columns: &[Column]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    for column in columns {
        match groups.last_mut() {
            Some(group) if group.year == column.year && group.month == column.month => {
                group.span += 1;
            }
            _ => groups.push(MonthGroup {
                year: column.year,
                month: column.month,
                span: 1,
            }),
        }
    }

    groups
}

/// The assembled weekly balance table, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTable {
    pub columns: Vec<Column>,
    pub months: Vec<MonthGroup>,
    pub rows: Vec<Row>,
    pub totals: AggregateSeries,
}

impl BalanceTable {
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Header text for one column, e.g. `"3rd"` for a month's third week.
    pub fn week_label(&self, index: usize) -> Option<String> {
        self.columns
            .get(index)
            .map(|c| ordinal_label(c.interval.ordinal))
    }
}

/// Assembles the presentation table from the processed parts.
///
/// Rows whose values sum to exactly zero are dropped, then the survivors
/// are stably sorted by category priority so income rows sit on top and
/// same-category rows keep their submission order. `totals` must already be
/// computed from the unfiltered row set.
pub fn assemble(columns: Vec<Column>, rows: Vec<Row>, totals: AggregateSeries) -> BalanceTable {
    let months = month_groups(&columns);

    let mut rows: Vec<Row> = rows.into_iter().filter(|r| r.sum() != 0.0).collect();
    rows.sort_by_key(|r| r.category.priority());

    BalanceTable {
        columns,
        months,
        rows,
        totals,
    }
}
