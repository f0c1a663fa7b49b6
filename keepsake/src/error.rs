use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeepsakeError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API authentication error: {0}")]
    ApiAuth(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for KeepsakeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            KeepsakeError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            KeepsakeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            KeepsakeError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            KeepsakeError::ApiAuth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            KeepsakeError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            KeepsakeError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            KeepsakeError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, KeepsakeError>;
