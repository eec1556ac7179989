use std::collections::BTreeMap;

use crate::shared::constants::errors;
use crate::shared::repository::{Referenced, RepositoryError};

/// Field name → human readable message.
pub type FieldErrors = BTreeMap<String, String>;

/// Failure side of every use case. The web layer picks the HTTP status
/// from the variant, so services never deal with status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn bad_request(message: &str) -> Self {
        Self::BadRequest(message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn internal(message: &str) -> Self {
        Self::Internal(message.to_string())
    }

    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.to_string());
        Self::Validation(errors)
    }

    /// Translation shared by writes and lookups: a dangling foreign
    /// reference reports the referenced entity, a missing target reports
    /// `not_found`, everything else is logged and hidden behind `fallback`.
    pub fn from_repository(err: RepositoryError, not_found: &str, fallback: &str) -> Self {
        match err {
            RepositoryError::UnknownReference(referenced) => {
                Self::not_found(referenced.not_found_message())
            }
            RepositoryError::NotFound => Self::not_found(not_found),
            other => {
                tracing::error!(error = %other, "{}", fallback);
                Self::internal(fallback)
            }
        }
    }

    /// Translation shared by every `fetch_all`: an unknown sort column is
    /// the caller's fault, anything else is a server error.
    pub fn from_list_failure(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidQuery(_) => Self::bad_request(errors::INVALID_SORT_FIELD),
            other => {
                tracing::error!(error = %other, "list query failed");
                Self::internal(errors::ERROR_IN_FETCHING_RECORDS)
            }
        }
    }
}
