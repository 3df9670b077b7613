//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel and are stored as `f64`; every sum or comparison goes
//! through `Decimal` first. Conversions and arithmetic are checked, so an
//! out-of-range value turns into an error instead of a zero or a panic.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price for a product or a menu
pub const MAX_PRICE: f64 = 100_000_000.0;
/// Maximum allowed quantity per menu product or order line item
pub const MAX_QUANTITY: i64 = 9999;

fn overflow(value: impl std::fmt::Display) -> AppError {
    AppError::with_message(ErrorCode::ValidationFailed, "Amount is out of range")
        .with_detail("value", value.to_string())
}

/// Convert f64 to Decimal for calculation
///
/// NaN, infinities and values beyond `Decimal`'s range are rejected.
#[inline]
pub fn to_decimal(value: f64) -> AppResult<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| overflow(value))
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// unit_price * quantity
pub fn line_total(unit_price: f64, quantity: i64) -> AppResult<Decimal> {
    to_decimal(unit_price)?
        .checked_mul(Decimal::from(quantity))
        .map(|d| d.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| overflow(format!("{unit_price} x {quantity}")))
}

/// Checked sum of already-rounded amounts
pub fn checked_sum(amounts: impl IntoIterator<Item = AppResult<Decimal>>) -> AppResult<Decimal> {
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        let amount = amount?;
        acc.checked_add(amount).ok_or_else(|| overflow(format!("{acc} + {amount}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_avoids_float_drift() {
        let sum = to_decimal(0.1).unwrap() + to_decimal(0.2).unwrap();
        assert_eq!(sum, Decimal::new(30, 2));
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(16000.0, 2).unwrap(), Decimal::from(32000));
        assert_eq!(line_total(2.55, 3).unwrap(), Decimal::new(765, 2));
        assert_eq!(line_total(9.99, 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_unrepresentable_values_are_errors() {
        for value in [f64::NAN, f64::INFINITY, 1e30] {
            let err = to_decimal(value).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
    }

    #[test]
    fn test_line_total_overflow_is_error() {
        let err = line_total(7e28, 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_checked_sum() {
        let total = checked_sum([line_total(1.5, 2), line_total(0.25, 4)]).unwrap();
        assert_eq!(total, Decimal::new(400, 2));
        assert_eq!(checked_sum(Vec::new()).unwrap(), Decimal::ZERO);

        let near_max = Ok(Decimal::MAX);
        assert!(checked_sum([near_max, Ok(Decimal::ONE)]).is_err());
    }
}
