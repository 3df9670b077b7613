//! Menu rules
//!
//! A menu may be discounted against its products but never priced above
//! them: `price <= Σ(product.price × quantity)`.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};

use super::money;

/// One resolved menu line: the current product price and the quantity
#[derive(Debug, Clone, Copy)]
pub struct PricedLine {
    pub product_price: f64,
    pub quantity: i64,
}

/// A menu price must be present, finite, not negative and within `MAX_PRICE`
pub fn validate_price(price: Option<f64>) -> AppResult<f64> {
    match price {
        Some(p) if p.is_finite() && (0.0..=money::MAX_PRICE).contains(&p) => Ok(p),
        Some(p) => Err(AppError::new(ErrorCode::MenuInvalidPrice).with_detail("price", p)),
        None => Err(AppError::new(ErrorCode::MenuInvalidPrice)),
    }
}

/// Every menu line needs a quantity between one and `MAX_QUANTITY`
pub fn validate_quantities(quantities: impl IntoIterator<Item = i64>) -> AppResult<()> {
    for quantity in quantities {
        if !(1..=money::MAX_QUANTITY).contains(&quantity) {
            return Err(AppError::new(ErrorCode::MenuProductInvalidQuantity)
                .with_detail("quantity", quantity));
        }
    }
    Ok(())
}

/// Σ(product price × quantity)
pub fn products_total(lines: &[PricedLine]) -> AppResult<Decimal> {
    money::checked_sum(
        lines
            .iter()
            .map(|l| money::line_total(l.product_price, l.quantity)),
    )
}

/// Reject a menu priced above the sum of its products
pub fn validate_price_within_products(price: f64, lines: &[PricedLine]) -> AppResult<()> {
    let price = money::to_decimal(price)?;
    let total = products_total(lines)?;
    if price > total {
        return Err(AppError::new(ErrorCode::MenuPriceExceedsProducts)
            .with_detail("price", money::to_f64(price))
            .with_detail("productsTotal", money::to_f64(total)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> Vec<PricedLine> {
        vec![PricedLine {
            product_price: 20000.0,
            quantity: 1,
        }]
    }

    #[test]
    fn test_price_equal_to_products_is_allowed() {
        assert!(validate_price_within_products(20000.0, &chicken()).is_ok());
    }

    #[test]
    fn test_price_above_products_is_rejected() {
        let err = validate_price_within_products(20001.0, &chicken()).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuPriceExceedsProducts);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_discounted_bundle() {
        let lines = [
            PricedLine {
                product_price: 16000.0,
                quantity: 2,
            },
            PricedLine {
                product_price: 1500.5,
                quantity: 1,
            },
        ];
        assert_eq!(products_total(&lines).unwrap(), Decimal::new(3350050, 2));
        assert!(validate_price_within_products(30000.0, &lines).is_ok());
        assert!(validate_price_within_products(33500.5, &lines).is_ok());
        assert!(validate_price_within_products(33500.51, &lines).is_err());
    }

    #[test]
    fn test_menu_without_products_must_be_free() {
        assert!(validate_price_within_products(0.0, &[]).is_ok());
        assert!(validate_price_within_products(0.01, &[]).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Some(0.0)).is_ok());
        assert_eq!(
            validate_price(None).unwrap_err().code,
            ErrorCode::MenuInvalidPrice
        );
        assert_eq!(
            validate_price(Some(-1000.0)).unwrap_err().code,
            ErrorCode::MenuInvalidPrice
        );
        assert!(validate_price(Some(money::MAX_PRICE)).is_ok());
        assert_eq!(
            validate_price(Some(1e30)).unwrap_err().code,
            ErrorCode::MenuInvalidPrice
        );
    }

    #[test]
    fn test_validate_quantities() {
        assert!(validate_quantities([1, 3]).is_ok());
        assert_eq!(
            validate_quantities([1, 0]).unwrap_err().code,
            ErrorCode::MenuProductInvalidQuantity
        );
        assert!(validate_quantities([money::MAX_QUANTITY]).is_ok());
        assert_eq!(
            validate_quantities([money::MAX_QUANTITY + 1]).unwrap_err().code,
            ErrorCode::MenuProductInvalidQuantity
        );
    }

    #[test]
    fn test_huge_menu_price_is_not_treated_as_zero() {
        let lines = [PricedLine {
            product_price: 1.0,
            quantity: 1,
        }];
        assert!(validate_price_within_products(1e30, &lines).is_err());
    }

    #[test]
    fn test_overflowing_products_total_is_error() {
        let lines = [PricedLine {
            product_price: 7e28,
            quantity: 2,
        }];
        let err = validate_price_within_products(1.0, &lines).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
