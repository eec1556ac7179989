use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Message could not be built: {0}")]
    Build(String),

    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Sends one HTML message.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str) -> Result<(), EmailError>;
}
