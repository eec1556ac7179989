use async_trait::async_trait;

use crate::modules::location::application::domain::entities::{
    CreateLocationCommand, LocationView, UpdateLocationCommand,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

/// Identifiers arrive as raw path segments; the service decides whether
/// they are a uuid or an internal key.
#[async_trait]
pub trait LocationUseCase: Send + Sync {
    async fn create(&self, command: CreateLocationCommand) -> Result<LocationView, ServiceError>;

    async fn search(&self, name: &str) -> Result<Vec<LocationView>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<LocationView, ServiceError>;

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<LocationView>, ServiceError>;

    async fn update(&self, id: &str, command: UpdateLocationCommand)
        -> Result<LocationView, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
