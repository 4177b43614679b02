use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[schemars(description = "Money coming in. Income rows sort above all spending rows.")]
    Income,

    #[schemars(description = "Debt repayments (loans, credit cards)")]
    Debt,

    #[schemars(description = "Recurring bills (rent, utilities, insurance)")]
    Bill,

    #[schemars(description = "Subscriptions (streaming, memberships)")]
    Sub,

    #[schemars(description = "Anything that fits none of the other spending categories")]
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Debt => "debt",
            Category::Bill => "bill",
            Category::Sub => "sub",
            Category::Other => "other",
        }
    }

    /// Display ordering: income first, then debt, bill, sub, other.
    pub fn priority(&self) -> usize {
        match self {
            Category::Income => 0,
            Category::Debt => 1,
            Category::Bill => 2,
            Category::Sub => 3,
            Category::Other => 4,
        }
    }

    /// Cell background for external renderers.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Income => "#c3e6cb",
            Category::Debt => "#f5c6cb",
            Category::Bill => "#add8e6",
            Category::Sub => "#F0E68C",
            Category::Other => "#e6e6fa",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Category::Income)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[schemars(description = "A single occurrence on the start date")]
    OneTime,

    #[schemars(description = "Every 7 days from the start date")]
    Weekly,

    #[schemars(description = "Every 14 days from the start date")]
    BiWeekly,

    #[schemars(
        description = "Once per calendar month, on the start date's day-of-month (clamped to shorter months)"
    )]
    Monthly,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IncomeEntry {
    #[schemars(description = "Amount received per occurrence")]
    pub amount: f64,

    #[schemars(description = "How often the income repeats")]
    pub frequency: Frequency,

    #[schemars(description = "Date of the first occurrence (YYYY-MM-DD)")]
    pub start_date: NaiveDate,

    #[serde(default)]
    #[schemars(description = "Last date an occurrence may fall on (inclusive). Optional.")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    #[schemars(description = "Maximum number of occurrences. Optional.")]
    pub repeat_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SpendingEntry {
    #[schemars(description = "Amount spent per occurrence")]
    pub amount: f64,

    #[schemars(description = "How often the spending repeats")]
    pub frequency: Frequency,

    #[schemars(description = "Date of the first occurrence (YYYY-MM-DD)")]
    pub start_date: NaiveDate,

    #[serde(default)]
    #[schemars(description = "Last date an occurrence may fall on (inclusive). Optional.")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    #[schemars(description = "Maximum number of occurrences. Optional.")]
    pub repeat_count: Option<u32>,

    #[serde(default)]
    #[schemars(description = "Spending category. Defaults to 'other' when omitted.")]
    pub category: Category,
}

/// The full input for one planning run: every income and spending submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SpendingPlanConfig {
    #[serde(default)]
    #[schemars(description = "Income submissions, in the order they were entered")]
    pub income: Vec<IncomeEntry>,

    #[serde(default)]
    #[schemars(description = "Spending submissions, in the order they were entered")]
    pub spending: Vec<SpendingEntry>,
}

impl SpendingPlanConfig {
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.spending.is_empty()
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SpendingPlanConfig)
    }

    pub fn schema_as_json() -> Result<String> {
        let schema = Self::generate_json_schema();
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One dated occurrence produced by expanding an entry. Immutable once
/// created; every occurrence of the same entry shares a submission id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub submission_id: Option<u64>,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: Category,
}

impl Transaction {
    pub fn new(submission_id: u64, date: NaiveDate, amount: f64, category: Category) -> Self {
        Self {
            submission_id: Some(submission_id),
            date,
            amount,
            category,
        }
    }
}
