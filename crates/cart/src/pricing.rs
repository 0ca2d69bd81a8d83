//! Pricing
//!
//! Totals are summed from unrounded line totals; rounding to cents happens only
//! when an amount is formatted for display.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::{items::CartItem, state::CartState};

/// Number of decimal places shown for monetary amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line or running total exceeded the decimal range.
    #[error("amount overflowed while pricing item {0}")]
    Overflow(String),
}

/// Price times quantity for one line, with a missing price read as zero.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit a decimal.
pub fn line_total(item: &CartItem) -> Result<Decimal, PricingError> {
    item.unit_price()
        .checked_mul(Decimal::from(item.quantity))
        .ok_or_else(|| PricingError::Overflow(item.id.to_string()))
}

/// Unrounded sum of every line total.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if any line or the running sum overflows.
pub fn sum_line_totals<'a>(
    items: impl IntoIterator<Item = &'a CartItem>,
) -> Result<Decimal, PricingError> {
    items.into_iter().try_fold(Decimal::ZERO, |total, item| {
        total
            .checked_add(line_total(item)?)
            .ok_or_else(|| PricingError::Overflow(item.id.to_string()))
    })
}

/// Cart total formatted to exactly two decimal places; `"0.00"` when empty.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum does not fit a decimal.
pub fn cart_total(state: &CartState) -> Result<String, PricingError> {
    sum_line_totals(state.items()).map(format_amount)
}

/// Rounds half away from zero to cents.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to cents and pads to exactly two places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_amount(amount))
}
