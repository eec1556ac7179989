use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Session token payload. The user's email is the only identity claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub key: String,
    pub iat: i64,
    pub exp: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, email: &str) -> Result<String, TokenError>;
    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
