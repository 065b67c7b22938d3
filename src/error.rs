use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Config error: {0}")]
    ConfigError(#[from] figment::Error),

    #[error("At least one transport (json or form) must be enabled")]
    NoTransport,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl IntoResponse for TodoError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            TodoError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: "Todo not found".to_string(),
                },
            ),
            TodoError::InvalidBody(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiErrorBody {
                    code: "INVALID_BODY".to_string(),
                    message: reason,
                },
            ),
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
