//! Present value evaluation over normalized series
//!
//! Discounting is ACT/365: each remainder amount is divided by
//! `(1 + rate)` raised to its day offset over 365, as a real exponent.

use super::normalize::NormalizedSeries;

/// Day count denominator for annualizing day offsets
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Present value of a normalized series at the given annual rate
///
/// `PV = seed + sum(amount / (1 + rate)^(days / 365))`. The anchor amount
/// sits at day zero and is never discounted. A non-positive `(1 + rate)`
/// raised to a fractional exponent yields NaN, which is returned as-is;
/// the rate solver treats such rates as unusable via its iteration cap.
pub fn present_value(series: &NormalizedSeries, rate: f64) -> f64 {
    let base = 1.0 + rate;
    series.seed_amount
        + series
            .remainder
            .iter()
            .map(|&(days, amount)| amount / base.powf(days as f64 / DAYS_PER_YEAR))
            .sum::<f64>()
}

/// Derivative of [`present_value`] with respect to the rate
///
/// Differentiating term by term: each remainder contributes
/// `-amount * b / (1 + rate)^(b + 1)` with `b = days / 365`. The seed is
/// constant in rate and contributes zero. Same NaN behavior as
/// [`present_value`].
pub fn present_value_derivative(series: &NormalizedSeries, rate: f64) -> f64 {
    let base = 1.0 + rate;
    series
        .remainder
        .iter()
        .map(|&(days, amount)| {
            let years = days as f64 / DAYS_PER_YEAR;
            -amount * years / base.powf(years + 1.0)
        })
        .sum()
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
    fn test_pv_at_implied_rate_is_zero() {
        // 1100 / 1.1 - 1000 = 0
        let pv = present_value(&one_year_series(), 0.1);
        assert!(pv.abs() < 1e-6, "Expected ~0, got {}", pv);
    }

    #[test]
    fn test_pv_at_zero_rate_is_undiscounted_sum() {
        let pv = present_value(&one_year_series(), 0.0);
        assert!((pv - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_offset_is_undiscounted() {
        let series = NormalizedSeries {
            start_day: 50,
            seed_amount: -400.0,
            remainder: vec![(0, 900.0)],
        };
        // (1 + rate)^0 = 1 regardless of rate
        let pv = present_value(&series, 0.37);
        assert!((pv - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_year_exponent() {
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: -1000.0,
            remainder: vec![(182, 1100.0)],
        };
        let expected = -1000.0 + 1100.0 / 1.1_f64.powf(182.0 / 365.0);
        let pv = present_value(&series, 0.1);
        assert!((pv - expected).abs() < 1e-9);
    }

    #[test]
    fn test_derivative_matches_closed_form() {
        // d/dr [1100 / (1 + r)] = -1100 / (1 + r)^2
        let deriv = present_value_derivative(&one_year_series(), 0.1);
        let expected = -1100.0 / 1.1_f64.powi(2);
        assert!((deriv - expected).abs() < 1e-9);
    }

    #[test]
    fn test_seed_contributes_nothing_to_derivative() {
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: -123456.0,
            remainder: vec![],
        };
        assert_eq!(present_value_derivative(&series, 0.1), 0.0);
    }

    #[test]
    fn test_non_positive_base_yields_nan() {
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: -1000.0,
            remainder: vec![(100, 1100.0)],
        };
        // (1 + rate) = -1, fractional exponent
        assert!(present_value(&series, -2.0).is_nan());
        assert!(present_value_derivative(&series, -2.0).is_nan());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let series = NormalizedSeries {
            start_day: 0,
            seed_amount: -1000.0,
            remainder: vec![(91, 250.0), (182, 300.0), (365, 600.0)],
        };
        let first = present_value(&series, 0.0734);
        let second = present_value(&series, 0.0734);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
