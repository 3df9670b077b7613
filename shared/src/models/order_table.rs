//! Order Table Model

use serde::{Deserialize, Serialize};

/// Order table entity (桌台)
///
/// `empty` tracks whether the table is free; `table_group_id` is set while
/// the table belongs to a table group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderTable {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl OrderTable {
    /// Whether the table is part of a table group
    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }
}

/// Create order table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableCreate {
    #[serde(default)]
    pub number_of_guests: i32,
    #[serde(default = "default_true")]
    pub empty: bool,
}

fn default_true() -> bool {
    true
}

/// Change empty flag payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableEmptyUpdate {
    pub empty: bool,
}

/// Change number of guests payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableGuestsUpdate {
    pub number_of_guests: i32,
}
