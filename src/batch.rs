//! Batch evaluation: rate sweeps and parallel XIRR over many series
//!
//! A sweep normalizes its series once and reuses the normalized form for
//! every rate. Independent series carry no shared state, so batches are
//! dispatched across the rayon thread pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cashflow::CashFlow;
use crate::error::FinanceError;
use crate::valuation::{normalize, present_value, solve_rate, DEFAULT_GUESS};

/// Net present value of a series at one rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    /// Annual discount rate
    pub rate: f64,

    /// Net present value at that rate
    pub npv: f64,
}

/// Evaluate one series at many discount rates
///
/// Validates and normalizes once; output order matches `rates`.
pub fn xnpv_sweep(series: &[CashFlow], rates: &[f64]) -> Result<Vec<RatePoint>, FinanceError> {
    let pairs: Vec<_> = series.iter().map(CashFlow::as_pair).collect();
    let normalized = normalize(&pairs)?;

    Ok(rates
        .iter()
        .map(|&rate| RatePoint {
            rate,
            npv: present_value(&normalized, rate),
        })
        .collect())
}

/// Solve XIRR for many independent series in parallel
///
/// Each series is validated and solved on its own; a failure in one entry
/// does not affect the others. Result order matches input order.
pub fn xirr_batch(
    portfolios: &[Vec<CashFlow>],
    guess: Option<f64>,
) -> Vec<Result<f64, FinanceError>> {
    let initial_rate = guess.unwrap_or(DEFAULT_GUESS);

    portfolios
        .par_iter()
        .map(|series| {
            let pairs: Vec<_> = series.iter().map(CashFlow::as_pair).collect();
            let normalized = normalize(&pairs)?;
            solve_rate(&normalized, initial_rate)
        })
        .collect()
}
