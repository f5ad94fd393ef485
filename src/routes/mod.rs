//! Router assembly.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Default request body limit in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Full application: common routes at the root, student routes under `/v1`.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/v1", student_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
