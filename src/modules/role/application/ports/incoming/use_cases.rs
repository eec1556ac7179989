use async_trait::async_trait;

use crate::modules::role::application::domain::entities::{
    CreateRoleCommand, RoleView, UpdateRoleCommand,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

/// Identifiers arrive as raw path segments; the service decides whether
/// they are a uuid or an internal key.
#[async_trait]
pub trait RoleUseCase: Send + Sync {
    async fn create(&self, command: CreateRoleCommand) -> Result<RoleView, ServiceError>;

    async fn search(&self, name: &str) -> Result<Vec<RoleView>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<RoleView, ServiceError>;

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<RoleView>, ServiceError>;

    async fn update(&self, id: &str, command: UpdateRoleCommand)
        -> Result<RoleView, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
