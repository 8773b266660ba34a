//! Ceiling-rounded proportional splitting of a paid total across tabs.
//!
//! The multiplier `total / subtotal` spreads tax, tip and fees uniformly over
//! every item. Each share rounds UP to the next whole cent, so the settled
//! charges can overshoot the paid total by a few cents but never undershoot
//! it and leave the payer short.

use thiserror::Error;

use crate::model::Money;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ChargeSplitError {
    /// The item subtotal is zero, so no multiplier exists.
    #[error("cannot split a total against a zero item subtotal")]
    ZeroSubtotal,
    /// The scaled share does not fit the signed cent range.
    #[error("scaled share does not fit the currency range")]
    ShareOutOfRange,
}

/// One tab's share of the paid total: `running_total * (total / subtotal)`,
/// rounded up to the nearest cent in exact integer arithmetic.
///
/// `subtotal` is expected to be positive; a zero subtotal is rejected rather
/// than allowed to reach the division.
pub fn proportional_share(
    running_total: Money,
    total: Money,
    subtotal: Money,
) -> Result<Money, ChargeSplitError> {
    if subtotal.is_zero() {
        return Err(ChargeSplitError::ZeroSubtotal);
    }

    let scaled = i128::from(running_total.cents()) * i128::from(total.cents());
    let cents = ceil_div(scaled, i128::from(subtotal.cents()));
    i64::try_from(cents)
        .map(Money::from_cents)
        .map_err(|_| ChargeSplitError::ShareOutOfRange)
}

/// Ceiling division toward positive infinity for a positive denominator.
fn ceil_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}
