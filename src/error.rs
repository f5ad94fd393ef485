//! Typed errors and HTTP mapping.

use crate::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name to violation message, as returned in a 400 body.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failure raised by a record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("The student with id: {0} not found")]
    NotFound(i32),
    #[error("operation failed: {0}")]
    OperationFailed(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("The student with id: {0} not found")]
    NotFound(i32),
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    /// Translate a service failure. `NotFound` passes through unchanged; anything
    /// else is logged and replaced by a generic message naming the action
    /// (e.g. "create the student").
    pub fn from_service(err: ServiceError, action: &str) -> Self {
        match err {
            ServiceError::NotFound(id) => AppError::NotFound(id),
            ServiceError::OperationFailed(cause) => {
                tracing::error!(error = %cause, action, "student operation failed");
                AppError::Unexpected(format!(
                    "There was an error while trying to {}. Please check the logs.",
                    action
                ))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(fields) => {
                return (StatusCode::BAD_REQUEST, Json(fields.clone())).into_response();
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
            AppError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred"),
        };
        let detail = match self {
            AppError::BadRequest(detail) | AppError::Unexpected(detail) => detail,
            other => other.to_string(),
        };
        (status, Json(ErrorResponse::new(message, detail))).into_response()
    }
}
