//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (200 once the item cache holds a snapshot)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{cache::CacheState, state::AppState};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does NOT wait for the cache to load.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 while the cache is populated and its refresh loop is running,
/// 503 before the first successful load and after shutdown began.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let cache_state = state.cache_status.state();
    let status = match cache_state {
        CacheState::Populated => StatusCode::OK,
        CacheState::Uninitialized | CacheState::Stopped => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(serde_json::json!({ "cache": cache_state }))).into_response()
}
