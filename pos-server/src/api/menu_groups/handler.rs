//! Menu Group API Handlers

use axum::{Json, extract::State};
use shared::models::{MenuGroup, MenuGroupCreate};

use crate::api::{AppResult, Created, created};
use crate::core::ServerState;
use crate::services;

/// POST /api/menu-groups - 创建菜单分组
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuGroupCreate>,
) -> AppResult<Created<MenuGroup>> {
    let group = services::menu_group::create(state.pool(), payload).await?;
    Ok(created(format!("/api/menu-groups/{}", group.id), group))
}

/// GET /api/menu-groups - 获取所有菜单分组
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuGroup>>> {
    let groups = services::menu_group::list(state.pool()).await?;
    Ok(Json(groups))
}
