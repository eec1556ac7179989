use async_trait::async_trait;

use crate::modules::status::application::domain::entities::StatusView;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::RepositoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct NewStatus {
    pub name: String,
    pub is_active: bool,
    pub is_deleted: bool,
}

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn create(&self, data: NewStatus) -> Result<StatusView, RepositoryError>;

    async fn list(&self, request: &ListRequest) -> Result<RecordList<StatusView>, RepositoryError>;
}
