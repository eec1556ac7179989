use async_trait::async_trait;

use crate::modules::corporate::application::domain::entities::{
    CorporateView, CreateCorporateCommand, UpdateCorporateCommand,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

/// Corporate writes carry their nested classrooms and are all-or-nothing.
#[async_trait]
pub trait CorporateUseCase: Send + Sync {
    async fn create(&self, command: CreateCorporateCommand) -> Result<CorporateView, ServiceError>;

    async fn search(&self, name: &str) -> Result<Vec<CorporateView>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<CorporateView, ServiceError>;

    async fn fetch_all(
        &self,
        request: ListRequest,
    ) -> Result<RecordList<CorporateView>, ServiceError>;

    async fn update(
        &self,
        id: &str,
        command: UpdateCorporateCommand,
    ) -> Result<CorporateView, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
