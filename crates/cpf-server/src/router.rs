//! Router configuration.

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Creates the application router.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
        .route("/auth/login", post(handlers::login))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Service information response.
#[derive(Serialize)]
pub struct ServerInfo {
    name: String,
    version: String,
}

/// Root endpoint handler.
async fn root() -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "cpf-auth-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET `/health`
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// GET `/health/live`
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
