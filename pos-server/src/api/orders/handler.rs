//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Order, OrderCreate, OrderStatusUpdate};

use crate::api::{AppResult, Created, created};
use crate::core::ServerState;
use crate::services;

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Created<Order>> {
    let order = services::order::create(state.pool(), payload).await?;
    Ok(created(format!("/api/orders/{}", order.id), order))
}

/// GET /api/orders - 获取所有订单 (含明细)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = services::order::list(state.pool()).await?;
    Ok(Json(orders))
}

/// PUT /api/orders/:id/order-status - 修改订单状态
pub async fn change_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = services::order::change_status(state.pool(), id, payload).await?;
    Ok(Json(order))
}
