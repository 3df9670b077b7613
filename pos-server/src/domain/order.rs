//! Order rules
//!
//! Status flow: COOKING → MEAL → COMPLETION. COMPLETION is terminal; any
//! other move, including MEAL back to COOKING, is accepted.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderLineItemInput, OrderStatus, OrderTable};

use super::money::MAX_QUANTITY;

/// Whether any order is still COOKING or MEAL
pub fn has_uncompleted(statuses: &[OrderStatus]) -> bool {
    statuses.iter().any(|s| !s.is_completion())
}

/// Check line items and return the distinct menu ids they reference
pub fn validate_line_items(items: &[OrderLineItemInput]) -> AppResult<Vec<i64>> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    let mut menu_ids: Vec<i64> = Vec::with_capacity(items.len());
    for item in items {
        if !(1..=MAX_QUANTITY).contains(&item.quantity) {
            return Err(AppError::new(ErrorCode::OrderLineItemInvalidQuantity)
                .with_detail("menuId", item.menu_id)
                .with_detail("quantity", item.quantity));
        }
        if !menu_ids.contains(&item.menu_id) {
            menu_ids.push(item.menu_id);
        }
    }
    Ok(menu_ids)
}

/// The table must exist and be occupied
pub fn validate_orderable_table(table: Option<&OrderTable>) -> AppResult<&OrderTable> {
    let table = table.ok_or_else(|| AppError::new(ErrorCode::TableNotFound))?;
    if table.empty {
        return Err(AppError::new(ErrorCode::TableEmpty).with_detail("tableId", table.id));
    }
    Ok(table)
}

/// Apply a status change; only COMPLETION refuses to move
pub fn transition(current: OrderStatus, next: OrderStatus) -> AppResult<OrderStatus> {
    if current.is_completion() {
        return Err(AppError::new(ErrorCode::OrderAlreadyCompleted)
            .with_detail("requested", next.as_str()));
    }
    Ok(next)
}
