use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::TrackerError;
use crate::types::{Rate, Years};
use crate::TrackerResult;

/// Fixed-length year used for every day-to-year conversion. Leap days are
/// not special-cased.
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// Whole calendar days from `start` to `end`. Negative when `end` precedes
/// `start`.
pub fn maturity_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Convert a day count into a fraction of a 365-day year.
pub fn years_from_days(days: i64) -> Years {
    Decimal::from(days) / DAYS_PER_YEAR
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound_factor(rate: Rate, periods: u64) -> TrackerResult<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..periods {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| overflow("compound factor", periods.into()))?;
    }
    Ok(result)
}

/// Compute (1 + r)^t for any non-negative exponent.
///
/// Whole exponents go through [`compound_factor`] so that a one-year term at
/// 10% yields exactly 1.1; fractional exponents fall back to `powd`.
pub fn growth_factor(rate: Rate, periods: Years) -> TrackerResult<Decimal> {
    if periods < Decimal::ZERO {
        return Err(TrackerError::InvalidInput {
            field: "periods".into(),
            reason: "Growth exponent must be >= 0".into(),
        });
    }
    if rate <= dec!(-1) {
        return Err(TrackerError::InvalidInput {
            field: "rate".into(),
            reason: "Rate must be greater than -100% to compound".into(),
        });
    }

    if rate.is_zero() || periods.is_zero() {
        return Ok(Decimal::ONE);
    }

    if periods.fract().is_zero() {
        if let Some(whole) = periods.to_u64() {
            return compound_factor(rate, whole);
        }
    }

    (Decimal::ONE + rate)
        .checked_powd(periods)
        .ok_or_else(|| overflow("growth factor", periods))
}

/// Error for an amount that leaves the decimal range.
pub(crate) fn amount_overflow(context: &str) -> TrackerError {
    TrackerError::InvalidInput {
        field: "principal".into(),
        reason: format!("{context} overflows decimal range"),
    }
}

fn overflow(context: &str, periods: Decimal) -> TrackerError {
    TrackerError::InvalidInput {
        field: "rate".into(),
        reason: format!("{context} overflows decimal range over {periods} periods"),
    }
}
