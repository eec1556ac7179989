use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::classroom::application::domain::entities::ClassroomLinks;
use crate::modules::classroom::application::ports::outgoing::{ClassroomChanges, NewClassroom};
use crate::modules::corporate::application::{
    domain::entities::{
        ClassroomDraft, ClassroomEdit, CorporateView, CreateCorporateCommand,
        UpdateCorporateCommand,
    },
    ports::{
        incoming::use_cases::CorporateUseCase,
        outgoing::{CorporateChanges, CorporateRepository, NewCorporate},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError, ServiceError};

#[derive(Debug, Clone)]
pub struct CorporateService<R>
where
    R: CorporateRepository,
{
    repository: R,
}

impl<R> CorporateService<R>
where
    R: CorporateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn ensure_unique_email(&self, email: &str, fallback: &str) -> Result<(), ServiceError> {
        let exists = self.repository.email_exists(email).await.map_err(|e| {
            error!(error = %e, email, "corporate email lookup failed");
            ServiceError::internal(fallback)
        })?;

        if exists {
            warn!(email, "Corporate email already registered");
            return Err(ServiceError::bad_request(errors::EMAIL_ALREADY_EXIST));
        }
        Ok(())
    }

    /// A unique index violation that slipped past the pre-check is still
    /// a duplicate email from the caller's point of view.
    fn write_error(err: RepositoryError, fallback: &str) -> ServiceError {
        match err {
            RepositoryError::Duplicate(_) => ServiceError::bad_request(errors::EMAIL_ALREADY_EXIST),
            other => ServiceError::from_repository(other, errors::CORPORATE_NOT_FOUND, fallback),
        }
    }
}

fn new_classroom(draft: &ClassroomDraft) -> NewClassroom {
    NewClassroom {
        name: draft.name.clone(),
        capacity: draft.capacity,
        links: ClassroomLinks {
            corporate: None,
            accessory: draft.accessory,
            status: draft.status,
        },
    }
}

fn classroom_changes(edit: &ClassroomEdit) -> (RecordRef, ClassroomChanges) {
    (
        edit.id,
        ClassroomChanges {
            name: edit.name.clone(),
            capacity: edit.capacity,
            links: ClassroomLinks {
                corporate: None,
                accessory: edit.accessory,
                status: edit.status,
            },
        },
    )
}

#[async_trait]
impl<R> CorporateUseCase for CorporateService<R>
where
    R: CorporateRepository,
{
    async fn create(&self, command: CreateCorporateCommand) -> Result<CorporateView, ServiceError> {
        self.ensure_unique_email(command.email(), errors::ERROR_IN_CORPORATE_CREATION)
            .await?;

        let data = NewCorporate {
            name: command.name().to_string(),
            email: command.email().to_string(),
            details: command.details().clone(),
            classrooms: command.classrooms().iter().map(new_classroom).collect(),
        };

        self.repository
            .create(data)
            .await
            .map_err(|e| Self::write_error(e, errors::ERROR_IN_CORPORATE_CREATION))
    }

    async fn search(&self, name: &str) -> Result<Vec<CorporateView>, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::bad_request(errors::NAME_EMPTY));
        }

        self.repository.search(name).await.map_err(|e| {
            error!(error = %e, "corporate search failed");
            ServiceError::internal(errors::ERROR_IN_FETCHING_CORPORATE)
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<CorporateView, ServiceError> {
        let reference = RecordRef::parse(id)
            .ok_or_else(|| ServiceError::not_found(errors::CORPORATE_NOT_FOUND))?;

        self.repository
            .find(&reference)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::CORPORATE_NOT_FOUND,
                    errors::ERROR_IN_FETCHING_CORPORATE,
                )
            })?
            .ok_or_else(|| ServiceError::not_found(errors::CORPORATE_NOT_FOUND))
    }

    async fn fetch_all(
        &self,
        request: ListRequest,
    ) -> Result<RecordList<CorporateView>, ServiceError> {
        self.repository
            .list(&request)
            .await
            .map_err(ServiceError::from_list_failure)
    }

    async fn update(
        &self,
        id: &str,
        command: UpdateCorporateCommand,
    ) -> Result<CorporateView, ServiceError> {
        let current = self.find_by_id(id).await?;

        if let Some(email) = command.email() {
            if !email.eq_ignore_ascii_case(&current.email) {
                self.ensure_unique_email(email, errors::ERROR_IN_UPDATE_CORPORATE)
                    .await?;
            }
        }

        let changes = CorporateChanges {
            name: command.name().map(str::to_string),
            email: command.email().map(str::to_string),
            details: command.details().clone(),
            new_classrooms: command.new_classrooms().iter().map(new_classroom).collect(),
            edited_classrooms: command
                .edited_classrooms()
                .iter()
                .map(classroom_changes)
                .collect(),
        };

        self.repository
            .update(current.key, changes)
            .await
            .map_err(|e| Self::write_error(e, errors::ERROR_IN_UPDATE_CORPORATE))
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let current = self.find_by_id(id).await?;

        self.repository
            .soft_delete(current.key)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::CORPORATE_NOT_FOUND,
                    errors::ERROR_IN_DELETE_CORPORATE,
                )
            })
    }
}
