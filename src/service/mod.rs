//! StudentService and request validation.

mod student;
mod validation;
pub use student::StudentService;
pub use validation::{RequestValidator, AGE_NOT_POSITIVE, EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED};
