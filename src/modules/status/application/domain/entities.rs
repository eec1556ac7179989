use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::errors;
use crate::shared::validation::{require, FieldValidator};
use crate::shared::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    #[serde(skip)]
    pub key: i32,
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Create Status Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateStatusCommand {
    name: String,
    is_active: bool,
    is_deleted: bool,
}

impl CreateStatusCommand {
    pub fn new(
        name: Option<String>,
        is_active: Option<bool>,
        is_deleted: Option<bool>,
    ) -> Result<Self, ServiceError> {
        let name = require(name, errors::NAME_EMPTY)?;

        FieldValidator::new()
            .name_length("name", &name, errors::NAME_LENGTH)
            .finish()?;

        Ok(Self {
            name,
            is_active: is_active.unwrap_or(true),
            is_deleted: is_deleted.unwrap_or(false),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
