//! Record store: keyed persistence for students.

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::{ensure_database_exists, PgStudentStore};

use crate::error::StoreError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;

/// Keyed CRUD over student records. Any call may fail with a storage error.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Persist a student. `None` inserts and assigns a fresh id; `Some(id)` writes
    /// every column of the row with that id, inserting it if absent.
    async fn save(&self, id: Option<i32>, student: NewStudent) -> Result<Student, StoreError>;

    /// All students in ascending id order.
    async fn find_all(&self) -> Result<Vec<Student>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, StoreError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
