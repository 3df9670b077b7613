//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu entity: a priced bundle of products
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Menu {
    pub id: i64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub menu_group_id: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub menu_products: Vec<MenuProduct>,
}

/// One (product, quantity) line of a menu, in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuProduct {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub name: String,
    pub price: Option<f64>,
    pub menu_group_id: i64,
    #[serde(default)]
    pub menu_products: Vec<MenuProductInput>,
}

/// Menu product line in a create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProductInput {
    pub product_id: i64,
    pub quantity: i64,
}
