//! Calendar-week partitioning.
//!
//! A month is partitioned into Sunday-start calendar weeks. A boundary week
//! that has three or fewer of its days inside the month is left to the
//! neighboring month; a kept week is always emitted with its full
//! Sunday-to-Saturday bounds, even when those bounds spill past the month
//! edge. Adjacent months therefore hand whole weeks back and forth instead of
//! producing ragged partial columns.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::{first_day_of_month, last_day_of_month, week_end, week_start};

/// In-month days a boundary week must exceed to be kept by the month under
/// construction.
const BOUNDARY_KEEP_DAYS: i64 = 3;

/// One calendar-week bucket owned by a single (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInterval {
    /// Sunday opening the week.
    pub start: NaiveDate,
    /// Saturday closing the week.
    pub end: NaiveDate,
    /// 1-based position among the weeks emitted for the owning month.
    pub ordinal: u32,
}

impl WeekInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One table column: a week interval tagged with its owning month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub year: i32,
    /// 0-based calendar month (January = 0), the index display layers use.
    pub month: u32,
    pub interval: WeekInterval,
}

impl Column {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.interval.contains(date)
    }
}

/// Partitions one month into week intervals under the boundary rule.
///
/// Walks Sunday-start calendar weeks from the month's first day. A week
/// whose overlap with the month is `<= BOUNDARY_KEEP_DAYS` days is skipped
/// (those days belong to the neighboring month's output); any other week is
/// emitted with full week bounds and the next 1-based ordinal. `month0` is
/// 0-based, matching [`Column::month`].
pub fn month_weeks(year: i32, month0: u32) -> Vec<WeekInterval> {
    let month_start = first_day_of_month(year, month0 + 1);
    let month_end = last_day_of_month(year, month0 + 1);

    let mut weeks = Vec::new();
    let mut cursor = month_start;

    while cursor <= month_end {
        let start = week_start(cursor);
        let end = week_end(cursor);

        let overlap_start = start.max(month_start);
        let overlap_end = end.min(month_end);
        let overlap_days = (overlap_end - overlap_start).num_days() + 1;

        if overlap_days > BOUNDARY_KEEP_DAYS {
            weeks.push(WeekInterval {
                start,
                end,
                ordinal: weeks.len() as u32 + 1,
            });
        }

        cursor = end + Duration::days(1);
    }

    weeks
}

/// Expands the span of `dates` into the global chronological column sequence,
/// one [`month_weeks`] call per month from the earliest date's month through
/// the latest date's month inclusive. Returns `None` when `dates` is empty,
/// which the caller treats as "no data" rather than an error.
pub fn build_columns(dates: &[NaiveDate]) -> Option<Vec<Column>> {
    let min = dates.iter().copied().min()?;
    let max = dates.iter().copied().max()?;

    let mut columns = Vec::new();
    for (year, month0) in months_spanned(min, max) {
        for week in month_weeks(year, month0) {
            columns.push(Column {
                key: format!("{}-{}-wk{}", year, month0, week.ordinal - 1),
                year,
                month: month0,
                interval: week,
            });
        }
    }

    Some(columns)
}

fn months_spanned(min: NaiveDate, max: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let mut year = min.year();
    let mut month0 = min.month0();

    loop {
        months.push((year, month0));
        if year == max.year() && month0 == max.month0() {
            break;
        }
        month0 += 1;
        if month0 == 12 {
            month0 = 0;
            year += 1;
        }
    }

    months
}
