//! Discount utilities
//!
//! Percentage maths shared by tier pricing. Percentages are expressed in
//! percent points (`12.5` means 12.5% off) and applied to minor units.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::pricing::PricingError;

/// Calculate the discount amount in minor units for a percentage of a minor unit amount.
///
/// The result is rounded to the nearest minor unit, with midpoints rounded away from zero.
///
/// # Errors
///
/// Returns [`PricingError::PercentConversion`] if the calculation overflows or the
/// result cannot be represented as an `i64`.
pub fn percent_of_minor(percent_points: Decimal, minor: i64) -> Result<i64, PricingError> {
    Decimal::from(minor)
        .checked_mul(percent_points)
        .and_then(|applied| applied.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(PricingError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::PercentConversion)
}

/// Reduce a minor unit amount by a percentage.
///
/// # Errors
///
/// Returns [`PricingError::PercentConversion`] if the discount cannot be computed
/// or subtracting it would overflow.
pub fn discounted_minor(percent_points: Decimal, minor: i64) -> Result<i64, PricingError> {
    minor
        .checked_sub(percent_of_minor(percent_points, minor)?)
        .ok_or(PricingError::PercentConversion)
}
