//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 单品接口
//! - [`menu_groups`] - 菜单分组接口
//! - [`menus`] - 菜单接口
//! - [`tables`] - 桌台接口
//! - [`table_groups`] - 并桌接口
//! - [`orders`] - 订单接口

pub mod health;

// Data models API
pub mod menu_groups;
pub mod menus;
pub mod orders;
pub mod products;
pub mod table_groups;
pub mod tables;

use axum::Json;
use http::{StatusCode, header};

// Re-export common types for handlers
pub use shared::error::{AppError, AppResult};

/// 201 Created + Location + body
pub type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

pub fn created<T>(location: String, body: T) -> Created<T> {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}
