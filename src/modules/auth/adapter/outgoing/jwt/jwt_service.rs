use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::modules::auth::application::ports::outgoing::{SessionClaims, TokenError, TokenProvider};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("session_ttl", &self.config.session_ttl)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_session_token(&self, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.session_ttl);

        let claims = SessionClaims {
            key: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.set_required_spec_claims(&["exp"]);

        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {e}");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::support::load_test_env;

    use super::*;

    fn test_secret() -> String {
        std::env::var("TEST_JWT_SECRET").unwrap_or_else(|_| "FAKE_JWT_SECRET_DO_NOT_USE".to_string())
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig::new(test_secret(), 3600))
    }

    #[test]
    fn test_issue_and_verify_session_token() {
        let service = create_test_jwt_service();

        let token = service
            .issue_session_token("jane@everest.org")
            .expect("Token should be generated");

        let claims = service.verify_session_token(&token);
        assert!(claims.is_ok(), "Token should be valid");

        let claims = claims.unwrap();
        assert_eq!(claims.key, "jane@everest.org");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_session_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_malformed_token_base64_error() {
        let service = create_test_jwt_service();

        let result = service.verify_session_token("not.a.valid@base64.token!");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_expired_token() {
        // Already expired beyond the leeway
        let service = JwtTokenService::new(JwtConfig::new(test_secret(), -35));

        let token = service
            .issue_session_token("jane@everest.org")
            .expect("Token should be generated");

        let result = service.verify_session_token(&token);

        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_invalid_signature() {
        load_test_env();

        let service = create_test_jwt_service();
        let token = service.issue_session_token("jane@everest.org").unwrap();

        let different_service = JwtTokenService::new(JwtConfig::new(
            format!("{}_DIFFERENT", service.config.secret_key),
            3600,
        ));

        let result = different_service.verify_session_token(&token);

        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = create_test_jwt_service();
        let mut token = service.issue_session_token("jane@everest.org").unwrap();

        token.push('x');

        assert!(service.verify_session_token(&token).is_err());
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = create_test_jwt_service();

        let token = service.issue_session_token("jane@everest.org").unwrap();
        let claims = service.verify_session_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now, "Expiry should be in the future");
        assert!(claims.iat <= now, "Issued at should be now or in the past");
    }

    #[test]
    fn test_token_error_display() {
        assert_eq!(TokenError::TokenExpired.to_string(), "Token has expired");
        assert_eq!(
            TokenError::InvalidSignature.to_string(),
            "Invalid token signature"
        );
        assert_eq!(TokenError::MalformedToken.to_string(), "Malformed token");
        assert_eq!(
            TokenError::EncodingError("test error".to_string()).to_string(),
            "Token encoding error: test error"
        );
    }

    #[test]
    fn test_jwt_service_debug_hides_secret() {
        let service = create_test_jwt_service();
        let debug_str = format!("{:?}", service);

        assert!(debug_str.contains("JwtTokenService"));
        assert!(!debug_str.contains(&test_secret()));
    }
}
