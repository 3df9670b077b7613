//! Product rules

use shared::error::{AppError, AppResult, ErrorCode};

use super::money::MAX_PRICE;

/// A product price must be present, finite, not negative and within `MAX_PRICE`
pub fn validate_price(price: Option<f64>) -> AppResult<f64> {
    match price {
        Some(p) if p.is_finite() && (0.0..=MAX_PRICE).contains(&p) => Ok(p),
        Some(p) => Err(AppError::new(ErrorCode::ProductInvalidPrice).with_detail("price", p)),
        None => Err(AppError::new(ErrorCode::ProductInvalidPrice)),
    }
}
