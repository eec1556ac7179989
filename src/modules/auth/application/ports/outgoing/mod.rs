pub mod account_repository;
pub mod password_hasher;
pub mod secure_code_repository;
pub mod token_provider;

pub use account_repository::AccountRepository;
pub use password_hasher::{HashError, PasswordHasher};
pub use secure_code_repository::SecureCodeRepository;
pub use token_provider::{SessionClaims, TokenError, TokenProvider};
