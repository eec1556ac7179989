use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::role::application::{
    domain::entities::{CreateRoleCommand, RoleView, UpdateRoleCommand},
    ports::{
        incoming::use_cases::RoleUseCase,
        outgoing::{NewRole, RoleChanges, RoleRepository},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, ServiceError};

#[derive(Debug, Clone)]
pub struct RoleService<R>
where
    R: RoleRepository,
{
    repository: R,
}

impl<R> RoleService<R>
where
    R: RoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn ensure_unique_name(&self, name: &str, fallback: &str) -> Result<(), ServiceError> {
        let exists = self.repository.name_exists(name).await.map_err(|e| {
            error!(error = %e, name, "role name lookup failed");
            ServiceError::internal(fallback)
        })?;

        if exists {
            warn!(name, "Role name already taken");
            return Err(ServiceError::bad_request(errors::NAME_ALREADY_EXISTS));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> RoleUseCase for RoleService<R>
where
    R: RoleRepository,
{
    async fn create(&self, command: CreateRoleCommand) -> Result<RoleView, ServiceError> {
        self.ensure_unique_name(command.name(), errors::ERROR_IN_ROLE_CREATION)
            .await?;

        let data = NewRole {
            name: command.name().to_string(),
            status: command.status().copied(),
        };

        self.repository.create(data).await.map_err(|e| {
            ServiceError::from_repository(e, errors::ROLE_NOT_FOUND, errors::ERROR_IN_ROLE_CREATION)
        })
    }

    async fn search(&self, name: &str) -> Result<Vec<RoleView>, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::bad_request(errors::NAME_EMPTY));
        }

        self.repository.search(name).await.map_err(|e| {
            error!(error = %e, "role search failed");
            ServiceError::internal(errors::ERROR_IN_FETCHING_ROLE)
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<RoleView, ServiceError> {
        let reference =
            RecordRef::parse(id).ok_or_else(|| ServiceError::not_found(errors::ROLE_NOT_FOUND))?;

        self.repository
            .find(&reference)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::ROLE_NOT_FOUND,
                    errors::ERROR_IN_FETCHING_ROLE,
                )
            })?
            .ok_or_else(|| ServiceError::not_found(errors::ROLE_NOT_FOUND))
    }

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<RoleView>, ServiceError> {
        self.repository
            .list(&request)
            .await
            .map_err(ServiceError::from_list_failure)
    }

    async fn update(
        &self,
        id: &str,
        command: UpdateRoleCommand,
    ) -> Result<RoleView, ServiceError> {
        let current = self.find_by_id(id).await?;

        if let Some(name) = command.name() {
            if !name.eq_ignore_ascii_case(&current.name) {
                self.ensure_unique_name(name, errors::ERROR_IN_UPDATE_ROLE)
                    .await?;
            }
        }

        let changes = RoleChanges {
            name: command.name().map(str::to_string),
            status: command.status().copied(),
        };

        self.repository
            .update(current.key, changes)
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, errors::ROLE_NOT_FOUND, errors::ERROR_IN_UPDATE_ROLE)
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let current = self.find_by_id(id).await?;

        self.repository
            .soft_delete(current.key)
            .await
            .map_err(|e| {
                ServiceError::from_repository(e, errors::ROLE_NOT_FOUND, errors::ERROR_IN_DELETE_ROLE)
            })
    }
}
