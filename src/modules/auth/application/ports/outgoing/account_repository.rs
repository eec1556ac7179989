use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::Account;
use crate::shared::RepositoryError;

/// Credential side of the user table.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Live user by exact email, joined with role, status and location.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;

    async fn record_login(&self, user_key: i32) -> Result<(), RepositoryError>;

    /// Stores the new hash, moves the user to `Active` and deletes the
    /// consumed code, all in one transaction.
    async fn complete_password_setup(
        &self,
        user_key: i32,
        password_hash: String,
        code_key: i32,
    ) -> Result<(), RepositoryError>;
}
