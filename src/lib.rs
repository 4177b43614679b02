//! # Spending Planner
//!
//! A library for turning submitted income and spending plans into a dense
//! weekly balance table: calendar-week columns grouped under month headers,
//! one row per submission, and running totals across the whole span.
//!
//! ## Core Concepts
//!
//! - **Submission**: one entry (amount, frequency, date range) expanded into dated transactions that share a submission id
//! - **Column**: one Sunday-start calendar week owned by a single month; a boundary week with three or fewer in-month days is left to the neighboring month
//! - **Row**: a submission's amounts laid out densely over the columns, split into several rows when a gap of more than ten columns appears
//! - **Lift-up**: values bubble upward through vertically adjacent same-category rows until the table is compacted from the top
//! - **Aggregates**: per-column total income, total spending, net, and cumulative running balance
//!
//! ## Example
//!
//! ```rust,ignore
//! use spending_planner::*;
//! use chrono::NaiveDate;
//!
//! let config = SpendingPlanConfig {
//!     income: vec![IncomeEntry {
//!         amount: 1000.0,
//!         frequency: Frequency::Weekly,
//!         start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!         end_date: None,
//!         repeat_count: Some(3),
//!     }],
//!     spending: vec![SpendingEntry {
//!         amount: 200.0,
//!         frequency: Frequency::Weekly,
//!         start_date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
//!         end_date: None,
//!         repeat_count: Some(2),
//!         category: Category::Bill,
//!     }],
//! };
//!
//! let table = process_spending_plan(&config).unwrap().unwrap();
//! println!("final balance: {:.2}", table.totals.final_balance());
//! ```

pub mod aggregate;
pub mod calendar;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod lift;
pub mod presentation;
pub mod recurrence;
pub mod rows;
pub mod schema;
pub mod utils;

pub use aggregate::AggregateSeries;
pub use calendar::{build_columns, month_weeks, Column, WeekInterval};
pub use engine::build_balance_table;
pub use error::{PlannerError, Result};
pub use grouping::{group_by_submission, SubmissionGroup};
pub use lift::lift_up;
pub use presentation::{
    assemble, month_groups, month_name, ordinal_label, BalanceTable, MonthGroup,
};
pub use recurrence::{expand_income, expand_spending, MAX_OCCURRENCES};
pub use rows::{build_rows, Row, GAP_THRESHOLD};
pub use schema::*;
pub use utils::*;

use chrono::NaiveDate;
use log::{debug, info};

pub struct SpendingPlanner;

impl SpendingPlanner {
    /// Validates and expands `config`, then builds the weekly balance table.
    ///
    /// Returns `Ok(None)` when the config produces no transactions at all,
    /// the "no data yet" state rather than an error.
    pub fn process(config: &SpendingPlanConfig) -> Result<Option<BalanceTable>> {
        validate_config(config)?;

        info!(
            "Processing spending plan with {} income and {} spending entries",
            config.income.len(),
            config.spending.len()
        );

        let mut next_id: u64 = 1;

        let mut income = Vec::new();
        for entry in &config.income {
            income.extend(expand_income(entry, next_id));
            next_id += 1;
        }

        let mut spending = Vec::new();
        for entry in &config.spending {
            spending.extend(expand_spending(entry, next_id));
            next_id += 1;
        }

        debug!(
            "Expanded {} income and {} spending transactions",
            income.len(),
            spending.len()
        );

        Ok(build_balance_table(&income, &spending))
    }
}

pub fn process_spending_plan(config: &SpendingPlanConfig) -> Result<Option<BalanceTable>> {
    SpendingPlanner::process(config)
}

fn validate_config(config: &SpendingPlanConfig) -> Result<()> {
    for (idx, entry) in config.income.iter().enumerate() {
        validate_entry(
            &format!("income entry #{}", idx + 1),
            entry.amount,
            entry.start_date,
            entry.end_date,
            entry.repeat_count,
        )?;
    }

    for (idx, entry) in config.spending.iter().enumerate() {
        validate_entry(
            &format!("spending entry #{}", idx + 1),
            entry.amount,
            entry.start_date,
            entry.end_date,
            entry.repeat_count,
        )?;
    }

    Ok(())
}

fn validate_entry(
    entry: &str,
    amount: f64,
    start: NaiveDate,
    end: Option<NaiveDate>,
    repeat_count: Option<u32>,
) -> Result<()> {
    if !amount.is_finite() {
        return Err(PlannerError::InvalidAmount {
            entry: entry.to_string(),
            amount,
        });
    }

    if let Some(end) = end {
        if end < start {
            return Err(PlannerError::InvalidDateRange {
                entry: entry.to_string(),
                start,
                end,
            });
        }
    }

    if repeat_count == Some(0) {
        return Err(PlannerError::InvalidRepeatCount {
            entry: entry.to_string(),
        });
    }

    Ok(())
}
