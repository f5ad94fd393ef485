//! Student CRUD handlers: create, list, update, delete.

use crate::error::AppError;
use crate::model::StudentDto;
use crate::response::{created, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub const DELETED_MESSAGE: &str = "The student was deleted successfully";

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

/// Turn the raw JSON extraction into a `StudentDto`. Unreadable bodies, a
/// missing JSON content type and non-object bodies all become 400s.
fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<StudentDto, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    if !value.is_object() {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("receive request create student");
    let body = parse_body(body)?;
    RequestValidator::validate(&body)?;
    let student = state
        .students
        .create(body)
        .await
        .map_err(|e| AppError::from_service(e, "create the student"))?;
    tracing::info!(id = student.id, "[END] create student");
    Ok(created(student))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("receive request get all students");
    let students = state
        .students
        .list()
        .await
        .map_err(|e| AppError::from_service(e, "get all students"))?;
    tracing::info!(count = students.len(), "[END] get all students");
    Ok(ok(students))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "receive request update student");
    let id = parse_id(&id_str)?;
    let body = parse_body(body)?;
    RequestValidator::validate(&body)?;
    let student = state
        .students
        .update(id, body)
        .await
        .map_err(|e| AppError::from_service(e, "update the student"))?;
    tracing::info!(id, "[END] update student");
    Ok(ok(student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "receive request delete student");
    let id = parse_id(&id_str)?;
    state
        .students
        .delete(id)
        .await
        .map_err(|e| AppError::from_service(e, "delete the student"))?;
    tracing::info!(id, "[END] delete student");
    Ok((StatusCode::OK, DELETED_MESSAGE))
}
