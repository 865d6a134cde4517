use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use itemkeep_core::item::ItemError;
use itemkeep_core::storage::{repository_error_to_status_code, RepositoryError};

/// Malformed input rejected before any repository call.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid input: bad 'id' path parameter")]
    InvalidId,
    #[error("invalid input: bad JSON in request body: {0}")]
    InvalidBody(String),
}

/// Application error type that wraps `anyhow::Error`.
///
/// Known error types pick the status code; anything else is a 500. The body
/// is always `{"error": "<message>"}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.is::<RequestError>() || self.0.is::<ItemError>() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Application error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
