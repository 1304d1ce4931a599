//! Cash flow records and the date capability they are keyed on

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date capability consumed by the valuation engine
///
/// Any type exposing a continuous integer day number works: subtracting two
/// day numbers gives the day offset between flows, and comparing them gives
/// ordering. Calendar dates and bare day indices both qualify.
pub trait DayNumber {
    /// Day index on a continuous calendar (larger = later)
    fn day_number(&self) -> i64;
}

impl DayNumber for NaiveDate {
    fn day_number(&self) -> i64 {
        self.num_days_from_ce() as i64
    }
}

impl DayNumber for i64 {
    fn day_number(&self) -> i64 {
        *self
    }
}

impl DayNumber for i32 {
    fn day_number(&self) -> i64 {
        *self as i64
    }
}

/// A single dated cash flow
///
/// Positive amounts are inflows, negative amounts are outflows. Zero
/// amounts are allowed but count toward neither sign when a series is
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Date the amount is paid or received
    pub date: NaiveDate,

    /// Signed amount (positive = inflow, negative = outflow)
    pub amount: f64,
}

impl CashFlow {
    /// Create a new cash flow
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self { date, amount }
    }

    /// View as the (date, amount) pair the valuation functions consume
    pub fn as_pair(&self) -> (NaiveDate, f64) {
        (self.date, self.amount)
    }
}
