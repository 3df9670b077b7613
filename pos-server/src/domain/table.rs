//! Order table rules
//!
//! Grouping merges free tables into one seating; ungrouping is only allowed
//! once every order on the member tables is completed.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderStatus, OrderTable, TableRef};

use super::order;

/// A table group needs at least this many distinct tables
pub const MIN_GROUP_SIZE: usize = 2;

/// Requested table ids, first occurrence wins
pub fn distinct_ids(refs: &[TableRef]) -> Vec<i64> {
    let mut ids: Vec<i64> = Vec::with_capacity(refs.len());
    for r in refs {
        if !ids.contains(&r.id) {
            ids.push(r.id);
        }
    }
    ids
}

pub fn validate_group_size(ids: &[i64]) -> AppResult<()> {
    if ids.len() < MIN_GROUP_SIZE {
        return Err(AppError::new(ErrorCode::TableGroupTooSmall).with_detail("count", ids.len()));
    }
    Ok(())
}

/// Every requested table must exist, be empty and not already grouped
pub fn validate_groupable(requested: &[i64], found: &[OrderTable]) -> AppResult<()> {
    if let Some(missing) = requested
        .iter()
        .find(|id| !found.iter().any(|t| t.id == **id))
    {
        return Err(AppError::new(ErrorCode::TableNotFound).with_detail("tableId", *missing));
    }
    if let Some(table) = found.iter().find(|t| !t.empty || t.is_grouped()) {
        return Err(AppError::new(ErrorCode::TableNotGroupable).with_detail("tableId", table.id));
    }
    Ok(())
}

/// All orders of the member tables must be COMPLETION
pub fn validate_ungroup(statuses: &[OrderStatus]) -> AppResult<()> {
    if order::has_uncompleted(statuses) {
        return Err(AppError::new(ErrorCode::TableGroupNotCompleted));
    }
    Ok(())
}

/// Grouped tables keep their flag; tables with running orders stay occupied
pub fn validate_change_empty(table: &OrderTable, statuses: &[OrderStatus]) -> AppResult<()> {
    if table.is_grouped() {
        return Err(AppError::new(ErrorCode::TableGrouped).with_detail("tableId", table.id));
    }
    if order::has_uncompleted(statuses) {
        return Err(
            AppError::new(ErrorCode::TableHasUncompletedOrders).with_detail("tableId", table.id)
        );
    }
    Ok(())
}

/// Guest count is non-negative and only tracked on occupied tables
pub fn validate_change_guests(table: &OrderTable, number_of_guests: i32) -> AppResult<()> {
    if number_of_guests < 0 {
        return Err(AppError::new(ErrorCode::TableInvalidGuestCount)
            .with_detail("numberOfGuests", number_of_guests));
    }
    if table.empty {
        return Err(AppError::with_message(
            ErrorCode::TableEmpty,
            "Cannot change number of guests of an empty table.",
        )
        .with_detail("tableId", table.id));
    }
    Ok(())
}

pub fn validate_initial_guests(number_of_guests: i32) -> AppResult<()> {
    if number_of_guests < 0 {
        return Err(AppError::new(ErrorCode::TableInvalidGuestCount)
            .with_detail("numberOfGuests", number_of_guests));
    }
    Ok(())
}
