use async_trait::async_trait;
use tracing::error;

use crate::modules::accessory::application::{
    domain::entities::{CreateAccessoryCommand, AccessoryView, UpdateAccessoryCommand},
    ports::{
        incoming::use_cases::AccessoryUseCase,
        outgoing::{NewAccessory, AccessoryChanges, AccessoryRepository},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, ServiceError};

#[derive(Debug, Clone)]
pub struct AccessoryService<R>
where
    R: AccessoryRepository,
{
    repository: R,
}

impl<R> AccessoryService<R>
where
    R: AccessoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AccessoryUseCase for AccessoryService<R>
where
    R: AccessoryRepository,
{
    async fn create(&self, command: CreateAccessoryCommand) -> Result<AccessoryView, ServiceError> {
        let data = NewAccessory {
            name: command.name().to_string(),
            status: command.status().copied(),
        };

        self.repository.create(data).await.map_err(|e| {
            ServiceError::from_repository(e, errors::ACCESSORY_NOT_FOUND, errors::ERROR_IN_ACCESSORY_CREATION)
        })
    }

    async fn search(&self, name: &str) -> Result<Vec<AccessoryView>, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::bad_request(errors::NAME_EMPTY));
        }

        self.repository.search(name).await.map_err(|e| {
            error!(error = %e, "accessory search failed");
            ServiceError::internal(errors::ERROR_IN_FETCHING_ACCESSORY)
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<AccessoryView, ServiceError> {
        let reference =
            RecordRef::parse(id).ok_or_else(|| ServiceError::not_found(errors::ACCESSORY_NOT_FOUND))?;

        self.repository
            .find(&reference)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::ACCESSORY_NOT_FOUND,
                    errors::ERROR_IN_FETCHING_ACCESSORY,
                )
            })?
            .ok_or_else(|| ServiceError::not_found(errors::ACCESSORY_NOT_FOUND))
    }

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<AccessoryView>, ServiceError> {
        self.repository
            .list(&request)
            .await
            .map_err(ServiceError::from_list_failure)
    }

    async fn update(
        &self,
        id: &str,
        command: UpdateAccessoryCommand,
    ) -> Result<AccessoryView, ServiceError> {
        let current = self.find_by_id(id).await?;

        let changes = AccessoryChanges {
            name: command.name().map(str::to_string),
            status: command.status().copied(),
        };

        self.repository
            .update(current.key, changes)
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, errors::ACCESSORY_NOT_FOUND, errors::ERROR_IN_UPDATE_ACCESSORY)
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let current = self.find_by_id(id).await?;

        self.repository
            .soft_delete(current.key)
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, errors::ACCESSORY_NOT_FOUND, errors::ERROR_IN_DELETE_ACCESSORY)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Referenced, RepositoryError};
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    /// In-memory accessories; soft-deleted rows stay in the vec with `deleted`.
    #[derive(Clone, Default)]
    struct InMemoryAccessoryRepository {
        rows: Arc<Mutex<Vec<(AccessoryView, bool)>>>,
        fail_writes: Option<RepositoryError>,
    }

    impl InMemoryAccessoryRepository {
        fn with_accessories(names: &[&str]) -> Self {
            let repo = Self::default();
            for (i, name) in names.iter().enumerate() {
                repo.rows.lock().unwrap().push((view(i as i32 + 1, name), false));
            }
            repo
        }

        fn first(&self) -> AccessoryView {
            self.rows.lock().unwrap()[0].0.clone()
        }
    }

    fn view(key: i32, name: &str) -> AccessoryView {
        let now = Utc::now();
        AccessoryView {
            key,
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl AccessoryRepository for InMemoryAccessoryRepository {
        async fn create(&self, data: NewAccessory) -> Result<AccessoryView, RepositoryError> {
            if let Some(err) = &self.fail_writes {
                return Err(err.clone());
            }
            let mut rows = self.rows.lock().unwrap();
            let created = view(rows.len() as i32 + 1, &data.name);
            rows.push((created.clone(), false));
            Ok(created)
        }

        async fn search(&self, pattern: &str) -> Result<Vec<AccessoryView>, RepositoryError> {
            let pattern = pattern.to_lowercase();
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|(r, deleted)| !deleted && r.name.to_lowercase().contains(&pattern))
                .map(|(r, _)| r.clone())
                .collect())
        }

        async fn find(&self, accessory: &RecordRef) -> Result<Option<AccessoryView>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|(r, deleted)| {
                    !deleted
                        && match accessory {
                            RecordRef::Key(key) => r.key == *key,
                            RecordRef::Public(id) => r.id == *id,
                        }
                })
                .map(|(r, _)| r.clone()))
        }

        async fn list(
            &self,
            _request: &ListRequest,
        ) -> Result<RecordList<AccessoryView>, RepositoryError> {
            Ok(RecordList::All(
                self.rows
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|(_, deleted)| !deleted)
                    .map(|(r, _)| r.clone())
                    .collect(),
            ))
        }

        async fn update(&self, key: i32, changes: AccessoryChanges) -> Result<AccessoryView, RepositoryError> {
            if let Some(err) = &self.fail_writes {
                return Err(err.clone());
            }
            let mut rows = self.rows.lock().unwrap();
            let (row, _) = rows
                .iter_mut()
                .find(|(r, deleted)| !deleted && r.key == key)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(name) = changes.name {
                row.name = name;
            }
            Ok(row.clone())
        }

        async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let entry = rows
                .iter_mut()
                .find(|(r, deleted)| !deleted && r.key == key)
                .ok_or(RepositoryError::NotFound)?;
            entry.1 = true;
            Ok(())
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_accessory_success() {
        let service = AccessoryService::new(InMemoryAccessoryRepository::default());

        let command = CreateAccessoryCommand::new(Some("Whiteboard".into()), None).unwrap();
        let accessory = service.create(command).await.unwrap();

        assert_eq!(accessory.name, "Whiteboard");
    }

    #[tokio::test]
    async fn create_accessory_with_unknown_status_is_not_found() {
        let repo = InMemoryAccessoryRepository {
            fail_writes: Some(RepositoryError::UnknownReference(Referenced::Status)),
            ..Default::default()
        };
        let service = AccessoryService::new(repo);

        let command =
            CreateAccessoryCommand::new(Some("Whiteboard".into()), Some(RecordRef::Key(42))).unwrap();
        let result = service.create(command).await;

        assert_eq!(result, Err(ServiceError::not_found(errors::STATUS_NOT_FOUND)));
    }

    #[tokio::test]
    async fn create_accessory_database_failure_is_internal() {
        let repo = InMemoryAccessoryRepository {
            fail_writes: Some(RepositoryError::DatabaseError("insert failed".into())),
            ..Default::default()
        };
        let service = AccessoryService::new(repo);

        let command = CreateAccessoryCommand::new(Some("Whiteboard".into()), None).unwrap();
        let result = service.create(command).await;

        assert_eq!(
            result,
            Err(ServiceError::internal(errors::ERROR_IN_ACCESSORY_CREATION))
        );
    }

    #[tokio::test]
    async fn find_by_id_accepts_both_identifier_shapes() {
        let repo = InMemoryAccessoryRepository::with_accessories(&["Projector", "Speaker"]);
        let service = AccessoryService::new(repo.clone());
        let admin = repo.first();

        let by_uuid = service.find_by_id(&admin.id.to_string()).await.unwrap();
        let by_key = service.find_by_id("1").await.unwrap();

        assert_eq!(by_uuid, admin);
        assert_eq!(by_key, admin);
    }

    #[tokio::test]
    async fn find_by_id_unknown_or_malformed_is_not_found() {
        let service = AccessoryService::new(InMemoryAccessoryRepository::with_accessories(&["Projector"]));

        let unknown = Uuid::new_v4().to_string();
        for id in ["99", unknown.as_str(), "not-an-id"] {
            assert_eq!(
                service.find_by_id(id).await,
                Err(ServiceError::not_found(errors::ACCESSORY_NOT_FOUND))
            );
        }
    }

    #[tokio::test]
    async fn search_requires_a_pattern() {
        let service = AccessoryService::new(InMemoryAccessoryRepository::with_accessories(&["Projector"]));

        assert_eq!(
            service.search("  ").await,
            Err(ServiceError::bad_request(errors::NAME_EMPTY))
        );

        let found = service.search("proj").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn update_renames_accessory() {
        let repo = InMemoryAccessoryRepository::with_accessories(&["Projector"]);
        let service = AccessoryService::new(repo.clone());

        let command = UpdateAccessoryCommand::new(Some("Smart Board".into()), None).unwrap();
        let updated = service.update("1", command).await.unwrap();

        assert_eq!(updated.name, "Smart Board");
    }

    #[tokio::test]
    async fn update_missing_accessory_is_not_found() {
        let service = AccessoryService::new(InMemoryAccessoryRepository::default());

        let result = service.update("5", UpdateAccessoryCommand::default()).await;

        assert_eq!(result, Err(ServiceError::not_found(errors::ACCESSORY_NOT_FOUND)));
    }

    #[tokio::test]
    async fn delete_hides_accessory_from_lookups() {
        let repo = InMemoryAccessoryRepository::with_accessories(&["Projector"]);
        let service = AccessoryService::new(repo.clone());
        let admin = repo.first();

        service.delete(&admin.id.to_string()).await.unwrap();

        assert_eq!(
            service.find_by_id(&admin.id.to_string()).await,
            Err(ServiceError::not_found(errors::ACCESSORY_NOT_FOUND))
        );
        assert_eq!(
            service.delete(&admin.id.to_string()).await,
            Err(ServiceError::not_found(errors::ACCESSORY_NOT_FOUND))
        );
        assert!(service.fetch_all(ListRequest::All).await.unwrap().rows().is_empty());
    }
}
