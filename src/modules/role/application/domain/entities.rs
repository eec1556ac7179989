use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::errors;
use crate::shared::validation::{require, FieldValidator};
use crate::shared::{RecordRef, Reference, ServiceError};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleView {
    #[serde(skip)]
    pub key: i32,
    pub id: Uuid,
    pub name: String,
    pub status: Option<Reference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Create Role Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoleCommand {
    name: String,
    status: Option<RecordRef>,
}

impl CreateRoleCommand {
    pub fn new(name: Option<String>, status: Option<RecordRef>) -> Result<Self, ServiceError> {
        let name = require(name, errors::NAME_EMPTY)?;

        FieldValidator::new()
            .name_length("name", &name, errors::NAME_LENGTH)
            .finish()?;

        Ok(Self { name, status })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Option<&RecordRef> {
        self.status.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Update Role Command
// ──────────────────────────────────────────────────────────
//

/// Partial update: `None` leaves the column untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateRoleCommand {
    name: Option<String>,
    status: Option<RecordRef>,
}

impl UpdateRoleCommand {
    pub fn new(name: Option<String>, status: Option<RecordRef>) -> Result<Self, ServiceError> {
        let name = name.map(|n| n.trim().to_string());

        let mut validator = FieldValidator::new();
        if let Some(ref name) = name {
            validator.name_length("name", name, errors::NAME_LENGTH);
        }
        validator.finish()?;

        Ok(Self { name, status })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn status(&self) -> Option<&RecordRef> {
        self.status.as_ref()
    }
}
