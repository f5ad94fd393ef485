//! Orchestration between transfer records and the record store.

use crate::error::ServiceError;
use crate::model::{NewStudent, Student, StudentDto};
use crate::store::StudentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        StudentService { store }
    }

    pub fn store(&self) -> &Arc<dyn StudentStore> {
        &self.store
    }

    /// Persist a new student. Any id in `dto` is ignored; the store assigns one.
    pub async fn create(&self, dto: StudentDto) -> Result<Student, ServiceError> {
        tracing::info!("[START] create student");
        let student = NewStudent::from(dto);
        match self.store.save(None, student).await {
            Ok(created) => {
                tracing::info!(id = created.id, "student saved");
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "error saving student");
                Err(e.into())
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        tracing::info!("[START] get all students");
        let students = self.store.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "error obtaining students");
            ServiceError::from(e)
        })?;
        tracing::info!(count = students.len(), "students fetched");
        Ok(students)
    }

    /// Replace the student with `id` by a record built entirely from `dto`.
    /// The existing row is only used to confirm the id exists; nothing is merged.
    pub async fn update(&self, id: i32, dto: StudentDto) -> Result<Student, ServiceError> {
        tracing::info!(id, "[START] update student");
        let result: Result<Student, ServiceError> = async move {
            if self.store.find_by_id(id).await?.is_none() {
                return Err(ServiceError::NotFound(id));
            }
            let updated = self.store.save(Some(id), NewStudent::from(dto)).await?;
            Ok(updated)
        }
        .await;
        match &result {
            Ok(_) => tracing::info!(id, "student updated"),
            Err(e) => tracing::error!(id, error = %e, "error updating student"),
        }
        result
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        tracing::info!(id, "[START] delete student");
        let result: Result<(), ServiceError> = async move {
            if !self.store.exists_by_id(id).await? {
                return Err(ServiceError::NotFound(id));
            }
            self.store.delete_by_id(id).await?;
            Ok(())
        }
        .await;
        match &result {
            Ok(()) => tracing::info!(id, "student deleted"),
            Err(e) => tracing::error!(id, error = %e, "error deleting student"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStudentStore;
    use async_trait::async_trait;

    fn dto(name: &str) -> StudentDto {
        StudentDto {
            id: None,
            full_name: name.into(),
            age: 30,
            email: "david.martinez@test.com".into(),
            address: Some("Av. siempre viva #124".into()),
            grade: 6.7,
        }
    }

    fn service() -> (StudentService, Arc<MemoryStudentStore>) {
        let store = Arc::new(MemoryStudentStore::new());
        (StudentService::new(store.clone()), store)
    }

    struct BrokenStore;

    #[async_trait]
    impl StudentStore for BrokenStore {
        async fn save(&self, _: Option<i32>, _: NewStudent) -> Result<Student, StoreError> {
            Err(StoreError::Unavailable("Authenticate DB failed".into()))
        }
        async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
            Err(StoreError::Unavailable("Authenticate DB failed".into()))
        }
        async fn find_by_id(&self, _: i32) -> Result<Option<Student>, StoreError> {
            Err(StoreError::Unavailable("Authenticate DB failed".into()))
        }
        async fn exists_by_id(&self, _: i32) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("Authenticate DB failed".into()))
        }
        async fn delete_by_id(&self, _: i32) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("Authenticate DB failed".into()))
        }
        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("Authenticate DB failed".into()))
        }
    }

    #[tokio::test]
    async fn create_echoes_fields_and_assigns_id() {
        let (svc, _) = service();
        let input = StudentDto { id: Some(99), ..dto("David Martínez") };
        let created = svc.create(input.clone()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.full_name, input.full_name);
        assert_eq!(created.age, input.age);
        assert_eq!(created.email, input.email);
        assert_eq!(created.address, input.address);
        assert_eq!(created.grade, input.grade);
    }

    #[tokio::test]
    async fn list_returns_everything_in_store() {
        let (svc, _) = service();
        assert!(svc.list().await.unwrap().is_empty());
        svc.create(dto("David Martínez")).await.unwrap();
        svc.create(dto("Isabella Díaz")).await.unwrap();
        let all = svc.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].full_name, "Isabella Díaz");
    }

    #[tokio::test]
    async fn update_replaces_whole_record_keeping_id() {
        let (svc, store) = service();
        svc.create(StudentDto { address: Some("Old street".into()), ..dto("Miriam Arredondo") })
            .await
            .unwrap();
        let updated = svc
            .update(1, StudentDto { id: Some(5), address: None, ..dto("David Martínez") })
            .await
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.full_name, "David Martínez");
        assert_eq!(updated.address, None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_leaves_store_alone() {
        let (svc, store) = service();
        let err = svc.update(1, dto("David Martínez")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(1)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_existing_student() {
        let (svc, store) = service();
        let created = svc.create(dto("David Martínez")).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(!store.exists_by_id(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let (svc, store) = service();
        svc.create(dto("David Martínez")).await.unwrap();
        let err = svc.delete(2).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(2)));
        assert_eq!(err.to_string(), "The student with id: 2 not found");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn store_failures_become_operation_failed() {
        let svc = StudentService::new(Arc::new(BrokenStore));
        assert!(matches!(svc.create(dto("x")).await, Err(ServiceError::OperationFailed(_))));
        assert!(matches!(svc.list().await, Err(ServiceError::OperationFailed(_))));
        assert!(matches!(svc.update(1, dto("x")).await, Err(ServiceError::OperationFailed(_))));
        assert!(matches!(svc.delete(1).await, Err(ServiceError::OperationFailed(_))));
    }
}
