//! Menu API Handlers

use axum::{Json, extract::State};
use shared::models::{Menu, MenuCreate};

use crate::api::{AppResult, Created, created};
use crate::core::ServerState;
use crate::services;

/// POST /api/menus - 创建菜单
///
/// 菜单价格不能超过所含单品价格 × 数量之和
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Created<Menu>> {
    let menu = services::menu::create(state.pool(), payload).await?;
    Ok(created(format!("/api/menus/{}", menu.id), menu))
}

/// GET /api/menus - 获取所有菜单 (含单品明细)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Menu>>> {
    let menus = services::menu::list(state.pool()).await?;
    Ok(Json(menus))
}
