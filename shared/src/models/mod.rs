//! Data models
//!
//! Shared between pos-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes (SQLite INTEGER PRIMARY KEY).
//! Relations are plain foreign-key ids; child collections are populated by
//! the repositories and skipped by FromRow.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;

// Re-exports
pub use menu::*;
pub use menu_group::*;
pub use order::*;
pub use order_table::*;
pub use product::*;
pub use table_group::*;
