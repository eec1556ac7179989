use async_trait::async_trait;

use crate::modules::location::application::domain::entities::LocationView;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub state: Option<String>,
    pub status: Option<RecordRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationChanges {
    pub name: Option<String>,
    pub state: Option<String>,
    pub status: Option<RecordRef>,
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, data: NewLocation) -> Result<LocationView, RepositoryError>;

    /// Case-insensitive exact match among live locations.
    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError>;

    async fn search(&self, pattern: &str) -> Result<Vec<LocationView>, RepositoryError>;

    async fn find(&self, location: &RecordRef) -> Result<Option<LocationView>, RepositoryError>;

    async fn list(&self, request: &ListRequest) -> Result<RecordList<LocationView>, RepositoryError>;

    async fn update(&self, key: i32, changes: LocationChanges) -> Result<LocationView, RepositoryError>;

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError>;
}
