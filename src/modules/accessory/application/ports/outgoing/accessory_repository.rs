use async_trait::async_trait;

use crate::modules::accessory::application::domain::entities::AccessoryView;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccessory {
    pub name: String,
    pub status: Option<RecordRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessoryChanges {
    pub name: Option<String>,
    pub status: Option<RecordRef>,
}

#[async_trait]
pub trait AccessoryRepository: Send + Sync {
    async fn create(&self, data: NewAccessory) -> Result<AccessoryView, RepositoryError>;

    async fn search(&self, pattern: &str) -> Result<Vec<AccessoryView>, RepositoryError>;

    async fn find(&self, accessory: &RecordRef) -> Result<Option<AccessoryView>, RepositoryError>;

    async fn list(&self, request: &ListRequest) -> Result<RecordList<AccessoryView>, RepositoryError>;

    async fn update(&self, key: i32, changes: AccessoryChanges) -> Result<AccessoryView, RepositoryError>;

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError>;
}
