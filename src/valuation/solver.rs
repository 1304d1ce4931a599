//! Newton-Raphson search for the zero-NPV rate

use log::{debug, warn};

use super::discount::{present_value, present_value_derivative};
use super::normalize::NormalizedSeries;
use crate::error::FinanceError;

/// Iteration budget before the search is abandoned
pub const MAX_ITERATIONS: u32 = 50_000;

/// Convergence tolerance, applied to both |NPV| and the rate step
pub const TOLERANCE: f64 = 1e-6;

/// Initial rate used when the caller supplies no guess (10%)
pub const DEFAULT_GUESS: f64 = 0.1;

/// Drive the rate toward the point where present value is zero
///
/// Each pass evaluates the NPV and its derivative at the current rate and
/// steps to `rate - npv / derivative`. The search succeeds when |NPV| and
/// the step size both fall within [`TOLERANCE`], returning the stepped
/// rate. Exactly [`MAX_ITERATIONS`] passes are attempted; exhaustion
/// returns `TooLongComputation`.
///
/// A zero derivative or a non-finite evaluation is not treated specially:
/// the iterate goes non-finite, the convergence test keeps failing, and
/// the iteration budget is the backstop.
pub fn solve_rate(series: &NormalizedSeries, initial_rate: f64) -> Result<f64, FinanceError> {
    let mut rate = initial_rate;
    let mut warned = false;

    for iteration in 0..MAX_ITERATIONS {
        let npv = present_value(series, rate);
        let derivative = present_value_derivative(series, rate);
        let next_rate = rate - npv / derivative;
        let delta = (next_rate - rate).abs();

        if npv.abs() <= TOLERANCE && delta <= TOLERANCE {
            debug!(
                "rate search converged to {} after {} iterations",
                next_rate,
                iteration + 1
            );
            return Ok(next_rate);
        }

        if !next_rate.is_finite() && !warned {
            warn!("rate search hit a non-finite iterate at iteration {}", iteration);
            warned = true;
        }

        rate = next_rate;
    }

    Err(FinanceError::TooLongComputation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_year_series() -> NormalizedSeries {
        NormalizedSeries {
            start_day: 0,
            seed_amount: -1000.0,
            remainder: vec![(365, 1100.0)],
        }
    }

    #[test]
    fn test_converges_to_ten_percent() {
        let rate = solve_rate(&one_year_series(), DEFAULT_GUESS).unwrap();
        assert!((rate - 0.1).abs() < 1e-6, "Expected ~0.1, got {}", rate);
    }

    #[test]
    fn test_converges_from_distant_guess() {
        let rate = solve_rate(&one_year_series(), 0.5).unwrap();
        assert!((rate - 0.1).abs() < 1e-6, "Expected ~0.1, got {}", rate);
    }

    #[test]
    fn test_solved_rate_zeroes_the_npv() {
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: -1200.0,
            remainder: vec![(90, 300.0), (180, 400.0), (270, 200.0), (365, 600.0)],
        };
        let rate = solve_rate(&series, DEFAULT_GUESS).unwrap();
        assert!(present_value(&series, rate).abs() <= TOLERANCE);
    }

    #[test]
    fn test_rootless_series_exhausts_budget() {
        // All-positive flows: the solver does not re-validate signs, and
        // the NPV stays bounded away from zero at every rate
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: 100.0,
            remainder: vec![(365, 200.0)],
        };
        assert_eq!(
            solve_rate(&series, DEFAULT_GUESS),
            Err(FinanceError::TooLongComputation)
        );
    }

    #[test]
    fn test_non_finite_iterates_end_in_budget_exhaustion() {
        // (1 + rate) < 0 with a fractional exponent: NaN from the first pass
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: -1000.0,
            remainder: vec![(100, 1100.0)],
        };
        assert_eq!(
            solve_rate(&series, -2.0),
            Err(FinanceError::TooLongComputation)
        );
    }
}
