use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::location::application::{
    domain::entities::{CreateLocationCommand, LocationView, UpdateLocationCommand},
    ports::{
        incoming::use_cases::LocationUseCase,
        outgoing::{NewLocation, LocationChanges, LocationRepository},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, ServiceError};

#[derive(Debug, Clone)]
pub struct LocationService<R>
where
    R: LocationRepository,
{
    repository: R,
}

impl<R> LocationService<R>
where
    R: LocationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn ensure_unique_name(&self, name: &str, fallback: &str) -> Result<(), ServiceError> {
        let exists = self.repository.name_exists(name).await.map_err(|e| {
            error!(error = %e, name, "location name lookup failed");
            ServiceError::internal(fallback)
        })?;

        if exists {
            warn!(name, "Location name already taken");
            return Err(ServiceError::bad_request(errors::NAME_ALREADY_EXISTS));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> LocationUseCase for LocationService<R>
where
    R: LocationRepository,
{
    async fn create(&self, command: CreateLocationCommand) -> Result<LocationView, ServiceError> {
        self.ensure_unique_name(command.name(), errors::ERROR_IN_LOCATION_CREATION)
            .await?;

        let data = NewLocation {
            name: command.name().to_string(),
            state: command.state().map(str::to_string),
            status: command.status().copied(),
        };

        self.repository.create(data).await.map_err(|e| {
            ServiceError::from_repository(e, errors::LOCATION_NOT_FOUND, errors::ERROR_IN_LOCATION_CREATION)
        })
    }

    async fn search(&self, name: &str) -> Result<Vec<LocationView>, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::bad_request(errors::NAME_EMPTY));
        }

        self.repository.search(name).await.map_err(|e| {
            error!(error = %e, "location search failed");
            ServiceError::internal(errors::ERROR_IN_FETCHING_LOCATION)
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<LocationView, ServiceError> {
        let reference =
            RecordRef::parse(id).ok_or_else(|| ServiceError::not_found(errors::LOCATION_NOT_FOUND))?;

        self.repository
            .find(&reference)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::LOCATION_NOT_FOUND,
                    errors::ERROR_IN_FETCHING_LOCATION,
                )
            })?
            .ok_or_else(|| ServiceError::not_found(errors::LOCATION_NOT_FOUND))
    }

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<LocationView>, ServiceError> {
        self.repository
            .list(&request)
            .await
            .map_err(ServiceError::from_list_failure)
    }

    async fn update(
        &self,
        id: &str,
        command: UpdateLocationCommand,
    ) -> Result<LocationView, ServiceError> {
        let current = self.find_by_id(id).await?;

        if let Some(name) = command.name() {
            if !name.eq_ignore_ascii_case(&current.name) {
                self.ensure_unique_name(name, errors::ERROR_IN_UPDATE_LOCATION)
                    .await?;
            }
        }

        let changes = LocationChanges {
            name: command.name().map(str::to_string),
            state: command.state().map(str::to_string),
            status: command.status().copied(),
        };

        self.repository
            .update(current.key, changes)
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, errors::LOCATION_NOT_FOUND, errors::ERROR_IN_UPDATE_LOCATION)
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let current = self.find_by_id(id).await?;

        self.repository
            .soft_delete(current.key)
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, errors::LOCATION_NOT_FOUND, errors::ERROR_IN_DELETE_LOCATION)
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

    /// In-memory locations; soft-deleted rows stay in the vec with `deleted`.
    #[derive(Clone, Default)]
    struct InMemoryLocationRepository {
        rows: Arc<Mutex<Vec<(LocationView, bool)>>>,
        fail_writes: Option<RepositoryError>,
    }

    impl InMemoryLocationRepository {
        fn with_locations(names: &[&str]) -> Self {
            let repo = Self::default();
            for (i, name) in names.iter().enumerate() {
                repo.rows.lock().unwrap().push((view(i as i32 + 1, name), false));
            }
            repo
        }

        fn first(&self) -> LocationView {
            self.rows.lock().unwrap()[0].0.clone()
        }
    }

    fn view(key: i32, name: &str) -> LocationView {
        let now = Utc::now();
        LocationView {
            key,
            id: Uuid::new_v4(),
            name: name.to_string(),
            state: None,
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl LocationRepository for InMemoryLocationRepository {
        async fn create(&self, data: NewLocation) -> Result<LocationView, RepositoryError> {
            if let Some(err) = &self.fail_writes {
                return Err(err.clone());
            }
            let mut rows = self.rows.lock().unwrap();
            let created = view(rows.len() as i32 + 1, &data.name);
            rows.push((created.clone(), false));
            Ok(created)
        }

        async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|(r, deleted)| !deleted && r.name.eq_ignore_ascii_case(name)))
        }

        async fn search(&self, pattern: &str) -> Result<Vec<LocationView>, RepositoryError> {
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

        async fn find(&self, location: &RecordRef) -> Result<Option<LocationView>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|(r, deleted)| {
                    !deleted
                        && match location {
                            RecordRef::Key(key) => r.key == *key,
                            RecordRef::Public(id) => r.id == *id,
                        }
                })
                .map(|(r, _)| r.clone()))
        }

        async fn list(
            &self,
            _request: &ListRequest,
        ) -> Result<RecordList<LocationView>, RepositoryError> {
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

        async fn update(&self, key: i32, changes: LocationChanges) -> Result<LocationView, RepositoryError> {
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
            if let Some(state) = changes.state {
                row.state = Some(state);
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
    async fn create_location_success() {
        let service = LocationService::new(InMemoryLocationRepository::default());

        let command = CreateLocationCommand::new(Some("Chennai".into()), Some("Tamil Nadu".into()), None).unwrap();
        let location = service.create(command).await.unwrap();

        assert_eq!(location.name, "Chennai");
    }

    #[tokio::test]
    async fn create_location_rejects_existing_name_case_insensitively() {
        let repo = InMemoryLocationRepository::with_locations(&["Bengaluru"]);
        let service = LocationService::new(repo.clone());

        let command = CreateLocationCommand::new(Some("bengaluru".into()), None, None).unwrap();
        let result = service.create(command).await;

        assert_eq!(
            result,
            Err(ServiceError::bad_request(errors::NAME_ALREADY_EXISTS))
        );
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_location_with_unknown_status_is_not_found() {
        let repo = InMemoryLocationRepository {
            fail_writes: Some(RepositoryError::UnknownReference(Referenced::Status)),
            ..Default::default()
        };
        let service = LocationService::new(repo);

        let command =
            CreateLocationCommand::new(Some("Chennai".into()), None, Some(RecordRef::Key(42))).unwrap();
        let result = service.create(command).await;

        assert_eq!(result, Err(ServiceError::not_found(errors::STATUS_NOT_FOUND)));
    }

    #[tokio::test]
    async fn create_location_database_failure_is_internal() {
        let repo = InMemoryLocationRepository {
            fail_writes: Some(RepositoryError::DatabaseError("insert failed".into())),
            ..Default::default()
        };
        let service = LocationService::new(repo);

        let command = CreateLocationCommand::new(Some("Chennai".into()), Some("Tamil Nadu".into()), None).unwrap();
        let result = service.create(command).await;

        assert_eq!(
            result,
            Err(ServiceError::internal(errors::ERROR_IN_LOCATION_CREATION))
        );
    }

    #[tokio::test]
    async fn find_by_id_accepts_both_identifier_shapes() {
        let repo = InMemoryLocationRepository::with_locations(&["Bengaluru", "Mysuru"]);
        let service = LocationService::new(repo.clone());
        let admin = repo.first();

        let by_uuid = service.find_by_id(&admin.id.to_string()).await.unwrap();
        let by_key = service.find_by_id("1").await.unwrap();

        assert_eq!(by_uuid, admin);
        assert_eq!(by_key, admin);
    }

    #[tokio::test]
    async fn find_by_id_unknown_or_malformed_is_not_found() {
        let service = LocationService::new(InMemoryLocationRepository::with_locations(&["Bengaluru"]));

        let unknown = Uuid::new_v4().to_string();
        for id in ["99", unknown.as_str(), "not-an-id"] {
            assert_eq!(
                service.find_by_id(id).await,
                Err(ServiceError::not_found(errors::LOCATION_NOT_FOUND))
            );
        }
    }

    #[tokio::test]
    async fn search_requires_a_pattern() {
        let service = LocationService::new(InMemoryLocationRepository::with_locations(&["Bengaluru"]));

        assert_eq!(
            service.search("  ").await,
            Err(ServiceError::bad_request(errors::NAME_EMPTY))
        );

        let found = service.search("ben").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn update_renames_location() {
        let repo = InMemoryLocationRepository::with_locations(&["Bengaluru"]);
        let service = LocationService::new(repo.clone());

        let command = UpdateLocationCommand::new(Some("Bengaluru Urban".into()), Some("Karnataka".into()), None).unwrap();
        let updated = service.update("1", command).await.unwrap();

        assert_eq!(updated.name, "Bengaluru Urban");
        assert_eq!(updated.state.as_deref(), Some("Karnataka"));
    }

    #[tokio::test]
    async fn update_to_same_name_with_other_case_is_allowed() {
        let service = LocationService::new(InMemoryLocationRepository::with_locations(&["Bengaluru"]));

        let command = UpdateLocationCommand::new(Some("BENGALURU".into()), None, None).unwrap();
        let updated = service.update("1", command).await.unwrap();

        assert_eq!(updated.name, "BENGALURU");
    }

    #[tokio::test]
    async fn update_to_taken_name_is_rejected() {
        let service = LocationService::new(InMemoryLocationRepository::with_locations(&["Bengaluru", "Mysuru"]));

        let command = UpdateLocationCommand::new(Some("mysuru".into()), None, None).unwrap();
        let result = service.update("1", command).await;

        assert_eq!(
            result,
            Err(ServiceError::bad_request(errors::NAME_ALREADY_EXISTS))
        );
    }

    #[tokio::test]
    async fn update_missing_location_is_not_found() {
        let service = LocationService::new(InMemoryLocationRepository::default());

        let result = service.update("5", UpdateLocationCommand::default()).await;

        assert_eq!(result, Err(ServiceError::not_found(errors::LOCATION_NOT_FOUND)));
    }

    #[tokio::test]
    async fn delete_hides_location_from_lookups() {
        let repo = InMemoryLocationRepository::with_locations(&["Bengaluru"]);
        let service = LocationService::new(repo.clone());
        let admin = repo.first();

        service.delete(&admin.id.to_string()).await.unwrap();

        assert_eq!(
            service.find_by_id(&admin.id.to_string()).await,
            Err(ServiceError::not_found(errors::LOCATION_NOT_FOUND))
        );
        assert_eq!(
            service.delete(&admin.id.to_string()).await,
            Err(ServiceError::not_found(errors::LOCATION_NOT_FOUND))
        );
        assert!(service.fetch_all(ListRequest::All).await.unwrap().rows().is_empty());
    }
}
