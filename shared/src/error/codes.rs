//! Unified error codes for the kitchen POS
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Product errors
//! - 2xxx: Menu errors (menu groups and menus)
//! - 3xxx: Table errors (order tables and table groups)
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 1xxx: Product ====================
    /// Referenced product does not exist
    ProductNotFound = 1001,
    /// Product price missing or negative
    ProductInvalidPrice = 1002,

    // ==================== 2xxx: Menu ====================
    /// Referenced menu group does not exist
    MenuGroupNotFound = 2001,
    /// Referenced menu does not exist
    MenuNotFound = 2101,
    /// Menu price missing or negative
    MenuInvalidPrice = 2102,
    /// Menu price exceeds the sum of its product prices
    MenuPriceExceedsProducts = 2103,
    /// Menu product quantity is outside 1..=9999
    MenuProductInvalidQuantity = 2104,

    // ==================== 3xxx: Table ====================
    /// Referenced order table does not exist
    TableNotFound = 3001,
    /// Operation requires an occupied table
    TableEmpty = 3002,
    /// Operation not allowed on a grouped table
    TableGrouped = 3003,
    /// Table still has cooking or meal orders
    TableHasUncompletedOrders = 3004,
    /// Number of guests is negative
    TableInvalidGuestCount = 3005,
    /// Table group needs at least two tables
    TableGroupTooSmall = 3101,
    /// Table is non-empty or already grouped
    TableNotGroupable = 3102,
    /// Referenced table group does not exist
    TableGroupNotFound = 3103,
    /// Table group has uncompleted orders
    TableGroupNotCompleted = 3104,

    // ==================== 4xxx: Order ====================
    /// Referenced order does not exist
    OrderNotFound = 4001,
    /// Order is completed and cannot change
    OrderAlreadyCompleted = 4002,
    /// Order has no line items
    OrderEmpty = 4003,
    /// Order line item quantity is outside 1..=9999
    OrderLineItemInvalidQuantity = 4004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Product
            ErrorCode::ProductNotFound => "Product does not exist.",
            ErrorCode::ProductInvalidPrice => "Product price must be zero or greater.",

            // Menu
            ErrorCode::MenuGroupNotFound => "Menu group does not exist.",
            ErrorCode::MenuNotFound => "Menu does not exist.",
            ErrorCode::MenuInvalidPrice => "Menu price must be zero or greater.",
            ErrorCode::MenuPriceExceedsProducts => {
                "Menu price cannot exceed the sum of its product prices."
            }
            ErrorCode::MenuProductInvalidQuantity => "Menu product quantity must be between 1 and 9999.",

            // Table
            ErrorCode::TableNotFound => "Order table does not exist.",
            ErrorCode::TableEmpty => "Order from empty table is not allowed",
            ErrorCode::TableGrouped => "Grouped table cannot change empty state.",
            ErrorCode::TableHasUncompletedOrders => {
                "Cannot change empty state of table with uncompleted orders."
            }
            ErrorCode::TableInvalidGuestCount => "Number of guests must be zero or greater.",
            ErrorCode::TableGroupTooSmall => "Table group must have at least two tables.",
            ErrorCode::TableNotGroupable => {
                "Cannot group non-empty table or already grouped table."
            }
            ErrorCode::TableGroupNotFound => "Table group does not exist.",
            ErrorCode::TableGroupNotCompleted => "Cannot ungroup non-completed table.",

            // Order
            ErrorCode::OrderNotFound => "Order does not exist.",
            ErrorCode::OrderAlreadyCompleted => "Order already completed cannot be changed",
            ErrorCode::OrderEmpty => "Order must have at least one line item.",
            ErrorCode::OrderLineItemInvalidQuantity => {
                "Order line item quantity must be between 1 and 9999."
            }

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Product
            1001 => Ok(ErrorCode::ProductNotFound),
            1002 => Ok(ErrorCode::ProductInvalidPrice),

            // Menu
            2001 => Ok(ErrorCode::MenuGroupNotFound),
            2101 => Ok(ErrorCode::MenuNotFound),
            2102 => Ok(ErrorCode::MenuInvalidPrice),
            2103 => Ok(ErrorCode::MenuPriceExceedsProducts),
            2104 => Ok(ErrorCode::MenuProductInvalidQuantity),

            // Table
            3001 => Ok(ErrorCode::TableNotFound),
            3002 => Ok(ErrorCode::TableEmpty),
            3003 => Ok(ErrorCode::TableGrouped),
            3004 => Ok(ErrorCode::TableHasUncompletedOrders),
            3005 => Ok(ErrorCode::TableInvalidGuestCount),
            3101 => Ok(ErrorCode::TableGroupTooSmall),
            3102 => Ok(ErrorCode::TableNotGroupable),
            3103 => Ok(ErrorCode::TableGroupNotFound),
            3104 => Ok(ErrorCode::TableGroupNotCompleted),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderAlreadyCompleted),
            4003 => Ok(ErrorCode::OrderEmpty),
            4004 => Ok(ErrorCode::OrderLineItemInvalidQuantity),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
