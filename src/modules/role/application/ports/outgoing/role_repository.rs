use async_trait::async_trait;

use crate::modules::role::application::domain::entities::RoleView;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub name: String,
    pub status: Option<RecordRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoleChanges {
    pub name: Option<String>,
    pub status: Option<RecordRef>,
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create(&self, data: NewRole) -> Result<RoleView, RepositoryError>;

    /// Case-insensitive exact match among live roles.
    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError>;

    async fn search(&self, pattern: &str) -> Result<Vec<RoleView>, RepositoryError>;

    async fn find(&self, role: &RecordRef) -> Result<Option<RoleView>, RepositoryError>;

    async fn list(&self, request: &ListRequest) -> Result<RecordList<RoleView>, RepositoryError>;

    async fn update(&self, key: i32, changes: RoleChanges) -> Result<RoleView, RepositoryError>;

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError>;
}
