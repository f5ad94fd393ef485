//! In-process store backed by an ordered map.

use super::StudentStore;
use crate::error::StoreError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Student>,
    last_id: i32,
}

/// Volatile store for tests and the `memory` backend. Ids start at 1.
#[derive(Default)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn save(&self, id: Option<i32>, student: NewStudent) -> Result<Student, StoreError> {
        let mut inner = self.inner.write().await;
        let id = match id {
            Some(id) => id,
            None => inner.last_id + 1,
        };
        inner.last_id = inner.last_id.max(id);
        let stored = student.with_id(id);
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
