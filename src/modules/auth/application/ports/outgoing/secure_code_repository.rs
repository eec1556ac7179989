use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{ActivationCode, StoredCode};
use crate::shared::RepositoryError;

#[async_trait]
pub trait SecureCodeRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<StoredCode>, RepositoryError>;

    async fn find_for_user(&self, user_key: i32) -> Result<Option<StoredCode>, RepositoryError>;

    /// Drops whatever code the user had and stores `code` in its place.
    async fn replace(&self, user_key: i32, code: &ActivationCode) -> Result<(), RepositoryError>;

    async fn remove(&self, code_key: i32) -> Result<(), RepositoryError>;
}
