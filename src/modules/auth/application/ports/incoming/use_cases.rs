use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::LoginOutcome;
use crate::shared::ServiceError;

#[async_trait]
pub trait AuthUseCase: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<LoginOutcome, ServiceError>;

    /// Consumes an activation code and activates the account.
    async fn setup_password(&self, code: &str, password: &str) -> Result<(), ServiceError>;

    /// Mails a setup link, reusing the user's code while it is still valid.
    async fn send_password_reset_link(&self, email: &str) -> Result<(), ServiceError>;
}
