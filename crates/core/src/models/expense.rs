use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single dated spending entry.
///
/// Expenses are immutable once logged: never merged, never edited, never
/// deleted. Several expenses may share the same date.
///
/// The serialized layout is fixed by the persisted-state contract: the
/// amount is stored under the field name `expense`, the date as a
/// `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date of the expense (local time, day granularity)
    pub date: NaiveDate,

    /// Amount spent (always positive)
    #[serde(rename = "expense")]
    pub amount: f64,
}

impl Expense {
    /// Create an expense stamped with today's local calendar date.
    pub fn new(amount: f64) -> Self {
        Self {
            date: Local::now().date_naive(),
            amount,
        }
    }

    /// Create an expense on an explicit date.
    pub fn on(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }
}
