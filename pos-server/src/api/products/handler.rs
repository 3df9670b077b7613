//! Product API Handlers

use axum::{Json, extract::State};
use shared::models::{Product, ProductCreate};

use crate::api::{AppResult, Created, created};
use crate::core::ServerState;
use crate::services;

/// POST /api/products - 创建单品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Created<Product>> {
    let product = services::product::create(state.pool(), payload).await?;
    Ok(created(format!("/api/products/{}", product.id), product))
}

/// GET /api/products - 获取所有单品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = services::product::list(state.pool()).await?;
    Ok(Json(products))
}
