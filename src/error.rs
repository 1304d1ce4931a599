//! Error taxonomy for cash flow validation and rate solving

use thiserror::Error;

/// Which sign of cash flow a series is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// No negative amount anywhere in the series
    Negative,
    /// No positive amount anywhere in the series
    Positive,
}

impl Polarity {
    /// Get the lowercase name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Negative => "negative",
            Polarity::Positive => "positive",
        }
    }
}

/// Failures surfaced by the validation pass or the rate search
///
/// All variants are detected synchronously and returned immediately;
/// nothing is retried internally. `TooLongComputation` is the only kind a
/// caller can sensibly retry, by supplying a different initial guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// The input series had no entries
    #[error("cash flow series is empty")]
    EmptyValues,

    /// A cash flow is dated before the anchor (first) entry
    #[error("cash flow date precedes the series start date")]
    ValuePrecedesStartDate,

    /// The series is single-signed and therefore has no rate of return
    #[error("cash flow series contains no {} amount", .0.as_str())]
    InvalidData(Polarity),

    /// Newton-Raphson exhausted its iteration budget without converging
    #[error("rate search did not converge within the iteration limit")]
    TooLongComputation,
}
