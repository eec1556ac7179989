#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub session_ttl: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn new(secret_key: impl Into<String>, session_ttl: i64) -> Self {
        Self {
            secret_key: secret_key.into(),
            session_ttl,
        }
    }
}
