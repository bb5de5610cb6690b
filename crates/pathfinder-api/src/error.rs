use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pathfinder_core::DomainError;
use thiserror::Error;

use crate::response::ApiResponse;

/// Errors returned by the JSON routes under `/api`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// HTTP status for a domain failure, shared by page and JSON routes.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::ValidationError(_) => StatusCode::BAD_REQUEST,
        DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DomainError::AuthRejected(_) => StatusCode::FORBIDDEN,
        DomainError::AuthServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::InvalidMenuItem { .. }
        | DomainError::MenuSourceError(_)
        | DomainError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::InvalidMenuItem { .. } => "INVALID_MENU_ITEM",
        DomainError::MenuSourceError(_) => "MENU_SOURCE_ERROR",
        DomainError::DatabaseError(_) => "DATABASE_ERROR",
        DomainError::AuthServiceUnavailable(_) => "AUTH_SERVICE_UNAVAILABLE",
        DomainError::AuthRejected(_) => "AUTH_REJECTED",
        DomainError::InvalidCredentials => "INVALID_CREDENTIALS",
        DomainError::ValidationError(_) => "VALIDATION_ERROR",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Domain(e) => (status_for(e), error_code(e), e.to_string()),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        if status.is_server_error() {
            tracing::error!("API error: {}", message);
        } else {
            tracing::warn!("API error: {}", message);
        }

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}
