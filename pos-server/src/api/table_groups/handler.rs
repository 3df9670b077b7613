//! Table Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{TableGroup, TableGroupCreate};

use crate::api::{AppResult, Created, created};
use crate::core::ServerState;
use crate::services;

/// POST /api/table-groups - 并桌
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableGroupCreate>,
) -> AppResult<Created<TableGroup>> {
    let group = services::table_group::create(state.pool(), payload).await?;
    Ok(created(format!("/api/table-groups/{}", group.id), group))
}

/// DELETE /api/table-groups/:id - 拆桌 (所有订单完成后)
pub async fn ungroup(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    services::table_group::ungroup(state.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
