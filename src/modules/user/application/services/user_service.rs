use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::auth::application::domain::entities::ActivationCode;
use crate::modules::auth::application::ports::outgoing::PasswordHasher;
use crate::modules::email::application::ports::outgoing::{AccountNotifier, Recipient};
use crate::modules::user::application::{
    domain::entities::{CreateUserCommand, SuperAdminSeed, UpdateUserCommand, UserView},
    ports::{
        incoming::use_cases::UserUseCase,
        outgoing::{NewUser, UserChanges, UserRepository},
    },
};
use crate::shared::constants::errors;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError, ServiceError};

pub struct UserService<R>
where
    R: UserRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    notifier: Arc<dyn AccountNotifier>,
    code_ttl: Duration,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        hasher: Arc<dyn PasswordHasher>,
        notifier: Arc<dyn AccountNotifier>,
        code_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            hasher,
            notifier,
            code_ttl,
        }
    }

    async fn ensure_unique_email(&self, email: &str, fallback: &str) -> Result<(), ServiceError> {
        let exists = self.repository.email_exists(email).await.map_err(|e| {
            error!(error = %e, email, "user email lookup failed");
            ServiceError::internal(fallback)
        })?;

        if exists {
            warn!(email, "User email already registered");
            return Err(ServiceError::bad_request(errors::EMAIL_ALREADY_EXIST));
        }
        Ok(())
    }

    async fn hash(&self, password: Option<&str>, fallback: &str) -> Result<Option<String>, ServiceError> {
        let Some(password) = password else {
            return Ok(None);
        };

        self.hasher.hash_password(password).await.map(Some).map_err(|e| {
            error!(error = %e, "password hashing failed");
            ServiceError::internal(fallback)
        })
    }

    fn write_error(err: RepositoryError, fallback: &str) -> ServiceError {
        match err {
            RepositoryError::Duplicate(_) => ServiceError::bad_request(errors::EMAIL_ALREADY_EXIST),
            other => ServiceError::from_repository(other, errors::USER_NOT_FOUND, fallback),
        }
    }

    /// Start-up seeding of the first account. Skipped when the email is
    /// already registered; returns whether a user was written.
    pub async fn ensure_super_admin(&self, seed: &SuperAdminSeed) -> Result<bool, ServiceError> {
        let command = seed.to_command()?;

        let exists = self
            .repository
            .email_exists(command.email())
            .await
            .map_err(|e| {
                error!(error = %e, "super admin lookup failed");
                ServiceError::internal(errors::ERROR_IN_USER_CREATE)
            })?;

        if exists {
            info!(email = command.email(), "super admin already present");
            return Ok(false);
        }

        let details = command.details();
        let password_hash = self
            .hash(details.password.as_deref(), errors::ERROR_IN_USER_CREATE)
            .await?;

        let data = NewUser {
            first_name: command.first_name().to_string(),
            last_name: details.last_name.clone(),
            email: command.email().to_string(),
            phone_no: details.phone_no.clone(),
            password_hash,
            role: None,
            location: None,
        };

        let user = self
            .repository
            .create_super_admin(data)
            .await
            .map_err(|e| Self::write_error(e, errors::ERROR_IN_USER_CREATE))?;

        info!(user_id = %user.id, "super admin seeded");
        Ok(true)
    }
}

#[async_trait]
impl<R> UserUseCase for UserService<R>
where
    R: UserRepository,
{
    async fn create(&self, command: CreateUserCommand) -> Result<UserView, ServiceError> {
        self.ensure_unique_email(command.email(), errors::ERROR_IN_USER_CREATE)
            .await?;

        let details = command.details();
        let password_hash = self
            .hash(details.password.as_deref(), errors::ERROR_IN_USER_CREATE)
            .await?;

        let data = NewUser {
            first_name: command.first_name().to_string(),
            last_name: details.last_name.clone(),
            email: command.email().to_string(),
            phone_no: details.phone_no.clone(),
            password_hash,
            role: command.links().role,
            location: command.links().location,
        };

        let code = ActivationCode::issue(self.code_ttl);

        let user = self
            .repository
            .create(data, &code)
            .await
            .map_err(|e| Self::write_error(e, errors::ERROR_IN_USER_CREATE))?;

        info!(user_id = %user.id, "user created, sending activation mail");

        let recipient = Recipient {
            email: user.email.clone(),
            name: user.first_name.clone(),
        };

        // The account stays; a fresh link can be requested through forgot-password.
        self.notifier
            .send_setup_password(&recipient, &code.code)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user.id, "activation mail failed");
                ServiceError::internal(errors::ERROR_IN_SENDING_EMAIL)
            })?;

        Ok(user)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<UserView>, ServiceError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(ServiceError::bad_request(errors::NAME_EMPTY));
        }

        self.repository.search(pattern).await.map_err(|e| {
            error!(error = %e, "user search failed");
            ServiceError::internal(errors::ERROR_IN_FETCHING_USER_LIST)
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<UserView, ServiceError> {
        let reference =
            RecordRef::parse(id).ok_or_else(|| ServiceError::not_found(errors::USER_NOT_FOUND))?;

        self.repository
            .find(&reference)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::USER_NOT_FOUND,
                    errors::ERROR_IN_FETCHING_USER_DETAIL,
                )
            })?
            .ok_or_else(|| ServiceError::not_found(errors::USER_NOT_FOUND))
    }

    async fn fetch_all(&self, request: ListRequest) -> Result<RecordList<UserView>, ServiceError> {
        self.repository.list(&request).await.map_err(|e| match e {
            RepositoryError::InvalidQuery(_) => ServiceError::from_list_failure(e),
            other => {
                error!(error = %other, "user list failed");
                ServiceError::internal(errors::ERROR_IN_FETCHING_USER_LIST)
            }
        })
    }

    async fn update(&self, id: &str, command: UpdateUserCommand) -> Result<UserView, ServiceError> {
        let current = self.find_by_id(id).await?;

        if let Some(email) = command.email() {
            if !email.eq_ignore_ascii_case(&current.email) {
                self.ensure_unique_email(email, errors::ERROR_IN_UPDATING_USER_DETAIL)
                    .await?;
            }
        }

        let details = command.details();
        let password_hash = self
            .hash(details.password.as_deref(), errors::ERROR_IN_UPDATING_USER_DETAIL)
            .await?;

        let changes = UserChanges {
            first_name: command.first_name().map(str::to_string),
            last_name: details.last_name.clone(),
            email: command.email().map(str::to_string),
            phone_no: details.phone_no.clone(),
            password_hash,
            role: command.links().role,
            location: command.links().location,
            status: command.links().status,
        };

        self.repository
            .update(current.key, changes)
            .await
            .map_err(|e| Self::write_error(e, errors::ERROR_IN_UPDATING_USER_DETAIL))
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let current = self.find_by_id(id).await?;

        self.repository
            .soft_delete(current.key)
            .await
            .map_err(|e| {
                ServiceError::from_repository(
                    e,
                    errors::USER_NOT_FOUND,
                    errors::ERROR_IN_DELETING_USER_DETAIL,
                )
            })
    }
}
