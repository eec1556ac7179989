use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::errors;
use crate::shared::validation::{require, FieldValidator};
use crate::shared::{RecordRef, Reference, ServiceError};

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[serde(skip)]
    pub key: i32,
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_no: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub role: Option<Reference>,
    pub location: Option<Reference>,
    pub status: Option<Reference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Foreign references a request may carry. `status` is ignored on create,
/// new accounts always start out inactive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserLinks {
    pub role: Option<RecordRef>,
    pub location: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

/// Free-form columns shared by create and update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDetails {
    pub last_name: Option<String>,
    pub phone_no: Option<String>,
    pub password: Option<String>,
}

impl UserDetails {
    fn normalized(self) -> Self {
        Self {
            last_name: trimmed(self.last_name),
            phone_no: trimmed(self.phone_no),
            // passwords are taken verbatim, only an empty one counts as absent
            password: self.password.filter(|p| !p.is_empty()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserCommand {
    first_name: String,
    email: String,
    details: UserDetails,
    links: UserLinks,
}

impl CreateUserCommand {
    pub fn new(
        first_name: Option<String>,
        email: Option<String>,
        details: UserDetails,
        links: UserLinks,
    ) -> Result<Self, ServiceError> {
        let first_name = require(first_name, errors::NAME_EMPTY)?;
        let email = require(email, errors::EMAIL_EMPTY)?;
        let details = details.normalized();

        FieldValidator::new()
            .name_length("firstName", &first_name, errors::FIRST_NAME_LENGTH)
            .email("email", &email)
            .phone("phoneNo", details.phone_no.as_deref())
            .finish()?;

        Ok(Self {
            first_name,
            email,
            details,
            links,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    pub fn links(&self) -> &UserLinks {
        &self.links
    }
}

//
// ──────────────────────────────────────────────────────────
// Super Admin Seed
// ──────────────────────────────────────────────────────────
//

/// First account of a fresh deployment, read from the `SUPER_ADMIN` JSON.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperAdminSeed {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_no: Option<String>,
}

impl std::fmt::Debug for SuperAdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuperAdminSeed")
            .field("first_name", &self.first_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl SuperAdminSeed {
    /// Runs the seed through the same checks as a regular create.
    pub fn to_command(&self) -> Result<CreateUserCommand, ServiceError> {
        let command = CreateUserCommand::new(
            Some(self.first_name.clone()),
            Some(self.email.clone()),
            UserDetails {
                last_name: self.last_name.clone(),
                phone_no: self.phone_no.clone(),
                password: Some(self.password.clone()),
            },
            UserLinks::default(),
        )?;

        if command.details().password.is_none() {
            return Err(ServiceError::field("password", errors::PASSWORD_EMPTY));
        }
        Ok(command)
    }
}

//
// ──────────────────────────────────────────────────────────
// Update User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateUserCommand {
    first_name: Option<String>,
    email: Option<String>,
    details: UserDetails,
    links: UserLinks,
}

impl UpdateUserCommand {
    pub fn new(
        first_name: Option<String>,
        email: Option<String>,
        details: UserDetails,
        links: UserLinks,
    ) -> Result<Self, ServiceError> {
        let first_name = first_name.map(|n| n.trim().to_string());
        let email = email.map(|e| e.trim().to_string());
        let details = details.normalized();

        let mut validator = FieldValidator::new();
        if let Some(ref first_name) = first_name {
            validator.name_length("firstName", first_name, errors::FIRST_NAME_LENGTH);
        }
        if let Some(ref email) = email {
            validator.email("email", email);
        }
        validator.phone("phoneNo", details.phone_no.as_deref()).finish()?;

        Ok(Self {
            first_name,
            email,
            details,
            links,
        })
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    pub fn links(&self) -> &UserLinks {
        &self.links
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
