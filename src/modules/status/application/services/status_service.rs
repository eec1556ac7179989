use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::status::application::{
    domain::entities::{CreateStatusCommand, StatusView},
    ports::{
        incoming::use_cases::StatusUseCase,
        outgoing::{NewStatus, StatusRepository},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RepositoryError, ServiceError};

#[derive(Debug, Clone)]
pub struct StatusService<R>
where
    R: StatusRepository,
{
    repository: R,
}

impl<R> StatusService<R>
where
    R: StatusRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> StatusUseCase for StatusService<R>
where
    R: StatusRepository,
{
    async fn create(&self, command: CreateStatusCommand) -> Result<StatusView, ServiceError> {
        let data = NewStatus {
            name: command.name().to_string(),
            is_active: command.is_active(),
            is_deleted: command.is_deleted(),
        };

        self.repository.create(data).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => {
                warn!(name = command.name(), "Status name already taken");
                ServiceError::bad_request(errors::NAME_ALREADY_EXISTS)
            }
            other => {
                error!(error = %other, "status creation failed");
                ServiceError::internal(errors::ERROR_IN_STATUS_CREATION)
            }
        })
    }

    async fn fetch_all(
        &self,
        request: ListRequest,
    ) -> Result<RecordList<StatusView>, ServiceError> {
        self.repository
            .list(&request)
            .await
            .map_err(ServiceError::from_list_failure)
    }
}
