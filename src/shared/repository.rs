use sea_orm::{DbErr, SqlErr};

use crate::shared::constants::errors;

/// Error returned by every outgoing persistence port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Record not found")]
    NotFound,

    #[error("Duplicate value: {0}")]
    Duplicate(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Unknown {0:?} reference")]
    UnknownReference(Referenced),
}

/// Tables other rows point at through `*_id` foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referenced {
    User,
    Status,
    Role,
    Location,
    Corporate,
    Classroom,
    Accessory,
}

impl Referenced {
    pub fn not_found_message(self) -> &'static str {
        match self {
            Referenced::User => errors::USER_NOT_FOUND,
            Referenced::Status => errors::STATUS_NOT_FOUND,
            Referenced::Role => errors::ROLE_NOT_FOUND,
            Referenced::Location => errors::LOCATION_NOT_FOUND,
            Referenced::Corporate => errors::CORPORATE_NOT_FOUND,
            Referenced::Classroom => errors::CLASSROOM_NOT_FOUND,
            Referenced::Accessory => errors::ACCESSORY_NOT_FOUND,
        }
    }
}

impl From<DbErr> for RepositoryError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::Duplicate(detail),
            _ => match e {
                DbErr::RecordNotFound(_) => RepositoryError::NotFound,
                other => RepositoryError::DatabaseError(other.to_string()),
            },
        }
    }
}
