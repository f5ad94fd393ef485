//! Student CRUD routes. Nest under `/v1`.

use crate::handlers::student::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list).post(create))
        .route("/students/:id", put(update).delete(delete_handler))
        .with_state(state)
}
