use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::email_sender::EmailError;

/// Addressee of an account mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(#[from] EmailError),
}

/// Account lifecycle mails carrying an activation code link.
#[async_trait]
pub trait AccountNotifier: Send + Sync {
    async fn send_setup_password(
        &self,
        recipient: &Recipient,
        code: &str,
    ) -> Result<(), NotificationError>;

    async fn send_password_reset(
        &self,
        recipient: &Recipient,
        code: &str,
    ) -> Result<(), NotificationError>;
}
