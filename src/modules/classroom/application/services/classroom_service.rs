use async_trait::async_trait;
use tracing::error;

use crate::modules::classroom::application::{
    domain::entities::{ClassroomView, CreateClassroomCommand, UpdateClassroomCommand},
    ports::{
        incoming::use_cases::ClassroomUseCase,
        outgoing::{ClassroomChanges, ClassroomRepository, NewClassroom},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, ServiceError};

#[derive(Debug, Clone)]
pub struct ClassroomService<R>
where
    R: ClassroomRepository,
{
    repository: R,
}

impl<R> ClassroomService<R>
where
    R: ClassroomRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ClassroomUseCase for ClassroomService<R>
where
    R: ClassroomRepository,
{
    async fn create(&self, command: CreateClassroomCommand) -> Result<ClassroomView, ServiceError> {
        let data = NewClassroom {
            name: command.name().to_string(),
            capacity: command.capacity(),
            links: command.links(),
        };

        self.repository.create(data).await.map_err(|e| {
            ServiceError::from_repository(
                e,
                errors::CLASSROOM_NOT_FOUND,
                errors::ERROR_IN_CLASSROOM_CREATION,
            )
        })
    }

    async fn search(&self, name: &str) -> Result<Vec<ClassroomView>, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::bad_request(errors::NAME_EMPTY));
        }

        self.repository.search(name).await.map_err(|e| {
            error!(error = %e, "classroom search failed");
            ServiceError::internal(errors::ERROR_IN_FETCHING_CLASSROOM)
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<ClassroomView, ServiceError> {
        let reference = RecordRef::parse(id)
            .ok_or_else(|| ServiceError::not_found(errors::CLASSROOM_NOT_FOUND))?;

        self.repository
            .find(&reference)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::CLASSROOM_NOT_FOUND,
                    errors::ERROR_IN_FETCHING_CLASSROOM,
                )
            })?
            .ok_or_else(|| ServiceError::not_found(errors::CLASSROOM_NOT_FOUND))
    }

    async fn fetch_all(
        &self,
        request: ListRequest,
    ) -> Result<RecordList<ClassroomView>, ServiceError> {
        self.repository
            .list(&request)
            .await
            .map_err(ServiceError::from_list_failure)
    }

    async fn update(
        &self,
        id: &str,
        command: UpdateClassroomCommand,
    ) -> Result<ClassroomView, ServiceError> {
        let current = self.find_by_id(id).await?;

        let changes = ClassroomChanges {
            name: command.name().map(str::to_string),
            capacity: command.capacity(),
            links: command.links(),
        };

        self.repository
            .update(current.key, changes)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::CLASSROOM_NOT_FOUND,
                    errors::ERROR_IN_CLASSROOM_UPDATE,
                )
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let current = self.find_by_id(id).await?;

        self.repository
            .soft_delete(current.key)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::CLASSROOM_NOT_FOUND,
                    errors::ERROR_IN_CLASSROOM_DELETE,
                )
            })
    }
}
