use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid amount in {entry}: {amount} is not finite")]
    InvalidAmount { entry: String, amount: f64 },

    #[error("Invalid date range in {entry}: end {end} precedes start {start}")]
    InvalidDateRange {
        entry: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Invalid repeat count in {entry}: must be at least 1")]
    InvalidRepeatCount { entry: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
