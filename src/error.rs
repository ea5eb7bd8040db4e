use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Application error taxonomy.
///
/// Every failure crosses the handler boundary as one of these variants and is
/// serialized as `{ "message": string }` with the matching HTTP status.
/// Callers should not rely on finer-grained discrimination than the status code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Wraps a MongoDB driver error as an internal error.
    ///
    /// The driver error is logged; the caller only sees the generic message
    /// naming the failed operation (e.g. "Failed to fetch cars").
    pub fn store(message: &str, err: mongodb::error::Error) -> Self {
        tracing::error!(error = ?err, "{message}");
        Self::internal(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
