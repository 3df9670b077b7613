//! Order Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{OrderTable, OrderTableCreate, OrderTableEmptyUpdate, OrderTableGuestsUpdate};

use crate::api::{AppResult, Created, created};
use crate::core::ServerState;
use crate::services;

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderTableCreate>,
) -> AppResult<Created<OrderTable>> {
    let table = services::order_table::create(state.pool(), payload).await?;
    Ok(created(format!("/api/tables/{}", table.id), table))
}

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderTable>>> {
    let tables = services::order_table::list(state.pool()).await?;
    Ok(Json(tables))
}

/// PUT /api/tables/:id/empty - 开台 / 清台
pub async fn change_empty(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderTableEmptyUpdate>,
) -> AppResult<Json<OrderTable>> {
    let table = services::order_table::change_empty(state.pool(), id, payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/:id/number-of-guests - 修改就餐人数
pub async fn change_number_of_guests(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderTableGuestsUpdate>,
) -> AppResult<Json<OrderTable>> {
    let table = services::order_table::change_number_of_guests(state.pool(), id, payload).await?;
    Ok(Json(table))
}
