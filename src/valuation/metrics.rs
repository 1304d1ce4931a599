//! XNPV and XIRR entry points

use super::discount::present_value;
use super::normalize::normalize;
use super::solver::{solve_rate, DEFAULT_GUESS};
use crate::cashflow::{CashFlow, DayNumber};
use crate::error::FinanceError;

/// Net present value of an irregular dated series at the given annual rate
///
/// Validates and normalizes the series, then evaluates once. The first
/// entry anchors the series: its amount enters undiscounted and its date
/// is day zero for every later flow.
pub fn xnpv<D: DayNumber>(series: &[(D, f64)], rate: f64) -> Result<f64, FinanceError> {
    let normalized = normalize(series)?;
    Ok(present_value(&normalized, rate))
}

/// Annualized rate at which the series' net present value is zero
///
/// Validates and normalizes once, then runs the Newton-Raphson search
/// starting from `guess` (default 10%). On `TooLongComputation` the caller
/// may retry with a different guess.
pub fn xirr<D: DayNumber>(series: &[(D, f64)], guess: Option<f64>) -> Result<f64, FinanceError> {
    let normalized = normalize(series)?;
    solve_rate(&normalized, guess.unwrap_or(DEFAULT_GUESS))
}

/// [`xnpv`] over a [`CashFlow`] slice
pub fn xnpv_series(series: &[CashFlow], rate: f64) -> Result<f64, FinanceError> {
    let pairs: Vec<_> = series.iter().map(CashFlow::as_pair).collect();
    xnpv(&pairs, rate)
}

/// [`xirr`] over a [`CashFlow`] slice
pub fn xirr_series(series: &[CashFlow], guess: Option<f64>) -> Result<f64, FinanceError> {
    let pairs: Vec<_> = series.iter().map(CashFlow::as_pair).collect();
    xirr(&pairs, guess)
}
