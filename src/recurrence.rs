//! Expansion of submitted entries into dated transactions.

use chrono::{Duration, NaiveDate};

use crate::schema::{Category, Frequency, IncomeEntry, SpendingEntry, Transaction};
use crate::utils::shift_month_clamped;

/// Hard ceiling on occurrences generated from one entry, ten years of
/// weekly payments. An open-ended entry with neither end date nor repeat
/// count stops here instead of expanding forever.
pub const MAX_OCCURRENCES: u32 = 520;

/// Expands one income entry. Every produced transaction carries
/// `submission_id` and [`Category::Income`].
pub fn expand_income(entry: &IncomeEntry, submission_id: u64) -> Vec<Transaction> {
    expand(
        submission_id,
        entry.amount,
        entry.frequency,
        entry.start_date,
        entry.end_date,
        entry.repeat_count,
        Category::Income,
    )
}

/// Expands one spending entry under its own category.
pub fn expand_spending(entry: &SpendingEntry, submission_id: u64) -> Vec<Transaction> {
    expand(
        submission_id,
        entry.amount,
        entry.frequency,
        entry.start_date,
        entry.end_date,
        entry.repeat_count,
        entry.category,
    )
}

fn expand(
    submission_id: u64,
    amount: f64,
    frequency: Frequency,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    repeat_count: Option<u32>,
    category: Category,
) -> Vec<Transaction> {
    // A one-time entry is a single occurrence on the start date; end date
    // and repeat count do not apply.
    if frequency == Frequency::OneTime {
        return vec![Transaction::new(submission_id, start_date, amount, category)];
    }

    let mut transactions = Vec::new();
    let mut current = start_date;

    loop {
        if end_date.is_some_and(|end| current > end) {
            break;
        }
        if repeat_count.is_some_and(|count| transactions.len() as u32 >= count) {
            break;
        }
        if transactions.len() as u32 >= MAX_OCCURRENCES {
            log::warn!(
                "entry starting {} has no reachable stop before {} occurrences, truncating",
                start_date,
                MAX_OCCURRENCES
            );
            break;
        }

        transactions.push(Transaction::new(submission_id, current, amount, category));

        match next_occurrence(current, frequency) {
            Some(next) => current = next,
            None => break,
        }
    }

    transactions
}

/// Date of the occurrence after one on `date`, stepping from the previous
/// occurrence. Monthly steps clamp to the target month's last day, so an
/// entry anchored on the 31st lands on Feb 28 and stays on the 28th after.
fn next_occurrence(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::OneTime => None,
        Frequency::Weekly => Some(date + Duration::days(7)),
        Frequency::BiWeekly => Some(date + Duration::days(14)),
        Frequency::Monthly => Some(shift_month_clamped(date, 1)),
    }
}
