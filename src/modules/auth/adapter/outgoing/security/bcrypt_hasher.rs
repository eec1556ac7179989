use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};
use tokio::task;

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// bcrypt hashing on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_owned();
        let cost = self.cost;

        task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|_| HashError::HashFailed)
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();

        task::spawn_blocking(move || verify(password, &hashed))
            .await
            .map_err(|_| HashError::TaskFailed)?
            .map_err(|_| HashError::VerifyFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = BcryptHasher::new(4);
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await;
        assert!(hashed_password.is_ok());

        let hashed_password = hashed_password.unwrap();
        assert_ne!(hashed_password, password);

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert_eq!(verify_correct, Ok(true));

        let verify_wrong = hasher
            .verify_password("WrongPassword", &hashed_password)
            .await;
        assert_eq!(verify_wrong, Ok(false));

        let verify_invalid_hash = hasher.verify_password(password, "invalid-hash").await;
        assert_eq!(verify_invalid_hash, Err(HashError::VerifyFailed));
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = BcryptHasher::new(4);

        let first = hasher.hash_password("same-password").await.unwrap();
        let second = hasher.hash_password("same-password").await.unwrap();

        assert_ne!(first, second);
    }
}
