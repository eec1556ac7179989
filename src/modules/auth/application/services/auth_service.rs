use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::auth::application::{
    domain::entities::{Account, ActivationCode, LoginOutcome},
    ports::{
        incoming::use_cases::AuthUseCase,
        outgoing::{AccountRepository, PasswordHasher, SecureCodeRepository, TokenProvider},
    },
};
use crate::modules::email::application::ports::outgoing::{AccountNotifier, Recipient};
use crate::shared::constants::errors;
use crate::shared::{RepositoryError, ServiceError};

pub struct AuthService<A, S>
where
    A: AccountRepository,
    S: SecureCodeRepository,
{
    accounts: A,
    codes: S,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    notifier: Arc<dyn AccountNotifier>,
    code_ttl: Duration,
}

impl<A, S> AuthService<A, S>
where
    A: AccountRepository,
    S: SecureCodeRepository,
{
    pub fn new(
        accounts: A,
        codes: S,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        notifier: Arc<dyn AccountNotifier>,
        code_ttl: Duration,
    ) -> Self {
        Self {
            accounts,
            codes,
            hasher,
            tokens,
            notifier,
            code_ttl,
        }
    }

    async fn account_by_email(&self, email: &str) -> Result<Option<Account>, ServiceError> {
        self.accounts.find_by_email(email).await.map_err(|e| {
            error!(error = %e, email, "account lookup failed");
            ServiceError::internal(errors::ERROR_IN_AUTH_VALIDATION)
        })
    }

    /// The user's current code while it is still valid, otherwise a fresh one.
    async fn usable_code(&self, user_key: i32) -> Result<String, ServiceError> {
        let existing = self.codes.find_for_user(user_key).await.map_err(|e| {
            error!(error = %e, user_key, "activation code lookup failed");
            ServiceError::internal(errors::SERVER_ERROR)
        })?;

        if let Some(stored) = existing {
            if !stored.is_expired_at(Utc::now()) {
                return Ok(stored.code);
            }
        }

        let fresh = ActivationCode::issue(self.code_ttl);
        self.codes.replace(user_key, &fresh).await.map_err(|e| {
            error!(error = %e, user_key, "activation code could not be stored");
            ServiceError::internal(errors::SERVER_ERROR)
        })?;

        Ok(fresh.code)
    }
}

#[async_trait]
impl<A, S> AuthUseCase for AuthService<A, S>
where
    A: AccountRepository,
    S: SecureCodeRepository,
{
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, ServiceError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ServiceError::bad_request(errors::EMAIL_EMPTY));
        }
        if password.is_empty() {
            return Err(ServiceError::bad_request(errors::PASSWORD_EMPTY));
        }

        let account = self
            .account_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found(errors::USER_NOT_FOUND))?;

        if account.is_inactive() {
            warn!(email, "login attempt on inactive account");
            return Err(ServiceError::bad_request(errors::INACTIVE_USER));
        }

        let Some(hash) = account.password_hash.as_deref() else {
            return Err(ServiceError::Unauthorized(errors::INVALID_CREDENTIALS.to_string()));
        };

        let matches = self.hasher.verify_password(password, hash).await.map_err(|e| {
            error!(error = %e, email, "password verification failed");
            ServiceError::internal(errors::ERROR_IN_AUTH_VALIDATION)
        })?;

        if !matches {
            warn!(email, "invalid credentials");
            return Err(ServiceError::Unauthorized(errors::INVALID_CREDENTIALS.to_string()));
        }

        let token = self
            .tokens
            .issue_session_token(&account.profile.email)
            .map_err(|e| {
                error!(error = %e, email, "session token could not be issued");
                ServiceError::internal(errors::ERROR_IN_AUTH_VALIDATION)
            })?;

        if let Err(e) = self.accounts.record_login(account.key).await {
            warn!(error = %e, email, "last login could not be recorded");
        }

        info!(email, "user authenticated");

        Ok(LoginOutcome {
            token,
            user: account.profile,
        })
    }

    async fn setup_password(&self, code: &str, password: &str) -> Result<(), ServiceError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ServiceError::bad_request(errors::ACTIVATION_CODE_EMPTY));
        }
        if password.is_empty() {
            return Err(ServiceError::bad_request(errors::PASSWORD_EMPTY));
        }

        let stored = self
            .codes
            .find_by_code(code)
            .await
            .map_err(|e| {
                error!(error = %e, "activation code lookup failed");
                ServiceError::internal(errors::ERROR_IN_PASSWORD_SETUP)
            })?
            .ok_or_else(|| ServiceError::not_found(errors::NO_PASSCODE_FOUND_FOR_USER))?;

        if stored.is_expired_at(Utc::now()) {
            info!(user_key = stored.user_key, "expired activation code presented");
            if let Err(e) = self.codes.remove(stored.key).await {
                warn!(error = %e, user_key = stored.user_key, "expired code could not be removed");
            }
            return Err(ServiceError::not_found(errors::NO_PASSCODE_FOUND_FOR_USER));
        }

        let hash = self.hasher.hash_password(password).await.map_err(|e| {
            error!(error = %e, "password hashing failed");
            ServiceError::internal(errors::ERROR_IN_PASSWORD_SETUP)
        })?;

        self.accounts
            .complete_password_setup(stored.user_key, hash, stored.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    ServiceError::not_found(errors::NO_PASSCODE_FOUND_FOR_USER)
                }
                other => {
                    error!(error = %other, user_key = stored.user_key, "password setup failed");
                    ServiceError::internal(errors::ERROR_IN_PASSWORD_SETUP)
                }
            })?;

        info!(user_key = stored.user_key, "password set up");
        Ok(())
    }

    async fn send_password_reset_link(&self, email: &str) -> Result<(), ServiceError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ServiceError::bad_request(errors::EMAIL_EMPTY));
        }

        let account = self
            .account_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::bad_request(errors::USER_NOT_FOUND))?;

        let code = self.usable_code(account.key).await?;

        let recipient = Recipient {
            email: account.profile.email.clone(),
            name: account.profile.first_name.clone(),
        };

        self.notifier
            .send_password_reset(&recipient, &code)
            .await
            .map_err(|e| {
                error!(error = %e, email, "password reset mail failed");
                ServiceError::internal(errors::ERROR_IN_SENDING_EMAIL)
            })?;

        info!(email, "password reset link sent");
        Ok(())
    }
}
