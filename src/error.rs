use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Unmatched paths are handled by axum's default 404 fallback and never
/// reach this type. Environment resolution always carries a default and
/// cannot fail.
#[derive(Debug)]
pub enum ApiError {
    /// Home page template missing or unreadable
    TemplateNotFound(PathBuf, std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::TemplateNotFound(path, err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template not found: {}: {}", path.display(), err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
