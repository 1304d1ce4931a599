//! Validation and normalization of raw cash flow series

use crate::cashflow::DayNumber;
use crate::error::{FinanceError, Polarity};

/// A validated series expressed as day offsets from its anchor entry
///
/// Built fresh from the raw input for each calculation and never mutated
/// afterwards. Remainder order matches input order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    /// Day number of the anchor (first) cash flow
    pub start_day: i64,

    /// Amount of the anchor cash flow; enters every valuation undiscounted
    pub seed_amount: f64,

    /// (day offset, amount) for each later cash flow; offsets are >= 0
    pub remainder: Vec<(i64, f64)>,
}

/// Validate a raw series and express it as day offsets from the anchor
///
/// The first entry is the anchor: its date becomes day zero and its amount
/// the seed. Checks, in order:
/// 1. the series is non-empty,
/// 2. no later entry is dated before the anchor (equal dates are fine),
/// 3. the whole series holds at least one negative and one positive amount.
///
/// The date scan fails fast on the first offending entry. Zero amounts
/// count toward neither sign.
pub fn normalize<D: DayNumber>(series: &[(D, f64)]) -> Result<NormalizedSeries, FinanceError> {
    let (anchor, rest) = match series.split_first() {
        Some(split) => split,
        None => return Err(FinanceError::EmptyValues),
    };

    let start_day = anchor.0.day_number();
    let seed_amount = anchor.1;

    let mut remainder = Vec::with_capacity(rest.len());
    for (date, amount) in rest {
        let day_offset = date.day_number() - start_day;
        if day_offset < 0 {
            return Err(FinanceError::ValuePrecedesStartDate);
        }
        remainder.push((day_offset, *amount));
    }

    let mut has_negative = seed_amount < 0.0;
    let mut has_positive = seed_amount > 0.0;
    for &(_, amount) in &remainder {
        has_negative |= amount < 0.0;
        has_positive |= amount > 0.0;
    }

    if !has_negative {
        return Err(FinanceError::InvalidData(Polarity::Negative));
    }
    if !has_positive {
        return Err(FinanceError::InvalidData(Polarity::Positive));
    }

    Ok(NormalizedSeries {
        start_day,
        seed_amount,
        remainder,
    })
}
