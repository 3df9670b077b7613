//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity (单品)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
}

/// Create product payload
///
/// `price` is optional on the wire so that a missing price is reported as a
/// domain error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: Option<f64>,
}
