//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
///
/// Progresses COOKING → MEAL → COMPLETION; COMPLETION is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    #[default]
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cooking => "COOKING",
            Self::Meal => "MEAL",
            Self::Completion => "COMPLETION",
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    /// Placement time (Unix millis)
    pub ordered_time: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItem>,
}

/// Order line item: a snapshot of menu id and quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderLineItem {
    pub seq: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub order_table_id: i64,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemInput>,
}

/// Line item in a create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemInput {
    pub menu_id: i64,
    pub quantity: i64,
}

/// Change order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order_status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Completion).unwrap();
        assert_eq!(json, "\"COMPLETION\"");

        let status: OrderStatus = serde_json::from_str("\"MEAL\"").unwrap();
        assert_eq!(status, OrderStatus::Meal);
    }

    #[test]
    fn test_order_status_default_is_cooking() {
        assert_eq!(OrderStatus::default(), OrderStatus::Cooking);
        assert!(!OrderStatus::Meal.is_completion());
        assert!(OrderStatus::Completion.is_completion());
    }

    #[test]
    fn test_order_create_camel_case() {
        let json = r#"{"orderTableId":1,"orderLineItems":[{"menuId":2,"quantity":3}]}"#;
        let create: OrderCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.order_table_id, 1);
        assert_eq!(create.order_line_items[0].menu_id, 2);
        assert_eq!(create.order_line_items[0].quantity, 3);
    }
}
