use async_trait::async_trait;

use crate::modules::classroom::application::domain::entities::{
    ClassroomView, CreateClassroomCommand, UpdateClassroomCommand,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

#[async_trait]
pub trait ClassroomUseCase: Send + Sync {
    async fn create(&self, command: CreateClassroomCommand) -> Result<ClassroomView, ServiceError>;

    async fn search(&self, name: &str) -> Result<Vec<ClassroomView>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<ClassroomView, ServiceError>;

    async fn fetch_all(
        &self,
        request: ListRequest,
    ) -> Result<RecordList<ClassroomView>, ServiceError>;

    async fn update(
        &self,
        id: &str,
        command: UpdateClassroomCommand,
    ) -> Result<ClassroomView, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
