use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{
    CreateUserCommand, UpdateUserCommand, UserView,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

#[async_trait]
pub trait UserUseCase: Send + Sync {
    /// Registers an inactive account and mails its activation link.
    async fn create(&self, command: CreateUserCommand) -> Result<UserView, ServiceError>;

    async fn search(&self, pattern: &str) -> Result<Vec<UserView>, ServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<UserView, ServiceError>;

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<UserView>, ServiceError>;

    async fn update(&self, id: &str, command: UpdateUserCommand)
        -> Result<UserView, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
