use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::clues::ClueStoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Clue store error: {0}")]
    ClueStore(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ClueStoreError> for AppError {
    fn from(e: ClueStoreError) -> Self {
        match e {
            ClueStoreError::NotFound(id) => {
                AppError::NotFound(format!("No clues stored for puzzle {id}"))
            }
            other => AppError::ClueStore(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::ClueStore(msg) => {
                tracing::error!("Clue store error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLUE_STORE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_not_found_maps_to_not_found() {
        let id = uuid::Uuid::new_v4();
        let err = AppError::from(ClueStoreError::NotFound(id));
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_clue_conflict_maps_to_storage_error() {
        let err = AppError::from(ClueStoreError::AlreadyStored(uuid::Uuid::new_v4()));
        assert!(matches!(err, AppError::ClueStore(_)));
    }

    #[test]
    fn test_backend_failure_maps_to_storage_error() {
        let err = AppError::from(ClueStoreError::Backend("connection refused".to_string()));
        assert!(matches!(err, AppError::ClueStore(_)));
    }
}
