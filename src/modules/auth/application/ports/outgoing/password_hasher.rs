use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Password hashing is CPU bound; implementations run it off the async workers.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
