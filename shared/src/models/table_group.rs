//! Table Group Model

use serde::{Deserialize, Serialize};

use super::OrderTable;

/// Table group entity: two or more tables combined for shared seating
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableGroup {
    pub id: i64,
    /// Creation time (Unix millis)
    pub created_date: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub order_tables: Vec<OrderTable>,
}

/// Create table group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupCreate {
    #[serde(default)]
    pub order_tables: Vec<TableRef>,
}

/// Reference to an existing order table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub id: i64,
}
