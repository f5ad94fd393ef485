//! Students API: CRUD REST service for student records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreBackend};
pub use error::{AppError, ConfigError, ServiceError, StoreError};
pub use model::{NewStudent, Student, StudentDto};
pub use response::ErrorResponse;
pub use routes::{build_router, common_routes, student_routes};
pub use service::{RequestValidator, StudentService};
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryStudentStore, PgStudentStore, StudentStore};
