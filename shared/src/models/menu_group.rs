//! Menu Group Model

use serde::{Deserialize, Serialize};

/// Menu group entity (菜单分组)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuGroup {
    pub id: i64,
    pub name: String,
}

/// Create menu group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroupCreate {
    pub name: String,
}
