use async_trait::async_trait;

use crate::modules::status::application::domain::entities::{CreateStatusCommand, StatusView};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

#[async_trait]
pub trait StatusUseCase: Send + Sync {
    async fn create(&self, command: CreateStatusCommand) -> Result<StatusView, ServiceError>;

    async fn fetch_all(&self, request: ListRequest)
        -> Result<RecordList<StatusView>, ServiceError>;
}
