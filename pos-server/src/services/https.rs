use crate::core::ServerState;
use axum::{Router, middleware};
use shared::error::{AppError, ErrorCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = uuid::Uuid::new_v4();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        target: "http_access",
        request_id = %request_id,
        elapsed_ms,
        "{} {} {}",
        method,
        uri,
        status
    );

    response
}

/// Unmatched routes answer with the unified error body
async fn not_found() -> AppError {
    AppError::new(ErrorCode::NotFound)
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        // Catalogue
        .merge(crate::api::products::router())
        .merge(crate::api::menu_groups::router())
        .merge(crate::api::menus::router())
        // Tables
        .merge(crate::api::tables::router())
        .merge(crate::api::table_groups::router())
        // Orders
        .merge(crate::api::orders::router())
        .fallback(not_found)
}

/// Bind state and apply the tower-http middleware stack
pub fn build_router(state: ServerState) -> Router {
    let timeout = state.config.request_timeout();
    build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
