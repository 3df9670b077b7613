//! Table Group API 模块 (并桌)

mod handler;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/table-groups",
        Router::new()
            .route("/", post(handler::create))
            .route("/{id}", delete(handler::ungroup)),
    )
}
