//! Per-column aggregate series derived from the full row set.

use serde::{Deserialize, Serialize};

use crate::rows::Row;

/// Column-aligned aggregate lines: gross income, gross spending, their
/// difference, and the cumulative running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSeries {
    pub total_income: Vec<f64>,
    pub total_spending: Vec<f64>,
    pub net: Vec<f64>,
    pub running_balance: Vec<f64>,
}

impl AggregateSeries {
    /// Sums `rows` into the four aggregate lines.
    ///
    /// Income rows feed `total_income`, every other category feeds
    /// `total_spending`. Callers aggregate before any row filtering so the
    /// totals reflect every transaction that landed in a column.
    pub fn from_rows(rows: &[Row], num_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.values.len() == num_columns));

        let mut total_income = vec![0.0; num_columns];
        let mut total_spending = vec![0.0; num_columns];

        for row in rows {
            let target = if row.category.is_income() {
                &mut total_income
            } else {
                &mut total_spending
            };
            for (slot, value) in target.iter_mut().zip(&row.values) {
                *slot += value;
            }
        }

        let net: Vec<f64> = total_income
            .iter()
            .zip(&total_spending)
            .map(|(income, spending)| income - spending)
            .collect();

        let mut running_balance = Vec::with_capacity(num_columns);
        let mut balance = 0.0;
        for value in &net {
            balance += value;
            running_balance.push(balance);
        }

        Self {
            total_income,
            total_spending,
            net,
            running_balance,
        }
    }

    pub fn overall_income(&self) -> f64 {
        self.total_income.iter().sum()
    }

    pub fn overall_spending(&self) -> f64 {
        self.total_spending.iter().sum()
    }

    /// Balance after the last column, or 0.0 when there are no columns.
    pub fn final_balance(&self) -> f64 {
        self.running_balance.last().copied().unwrap_or(0.0)
    }
}
