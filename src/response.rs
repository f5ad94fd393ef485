//! Response bodies shared by handlers and the error mapping.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Body of every non-validation error: a short category plus the detail text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ErrorResponse {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
