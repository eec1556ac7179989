use async_trait::async_trait;

use crate::modules::accessory::application::domain::entities::{
    CreateAccessoryCommand, AccessoryView, UpdateAccessoryCommand,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

/// Identifiers arrive as raw path segments; the service decides whether
/// they are a uuid or an internal key.
#[async_trait]
pub trait AccessoryUseCase: Send + Sync {
    async fn create(&self, command: CreateAccessoryCommand) -> Result<AccessoryView, ServiceError>;

    async fn search(&self, name: &str) -> Result<Vec<AccessoryView>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<AccessoryView, ServiceError>;

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<AccessoryView>, ServiceError>;

    async fn update(&self, id: &str, command: UpdateAccessoryCommand)
        -> Result<AccessoryView, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
