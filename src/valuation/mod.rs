//! Valuation engine: normalization, discounting, and rate solving

mod discount;
mod metrics;
mod normalize;
mod solver;

pub use discount::{present_value, present_value_derivative, DAYS_PER_YEAR};
pub use metrics::{xirr, xirr_series, xnpv, xnpv_series};
pub use normalize::{normalize, NormalizedSeries};
pub use solver::{solve_rate, DEFAULT_GUESS, MAX_ITERATIONS, TOLERANCE};
