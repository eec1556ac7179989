use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::errors;
use crate::shared::validation::{require, FieldValidator};
use crate::shared::{RecordRef, Reference, ServiceError};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomView {
    #[serde(skip)]
    pub key: i32,
    pub id: Uuid,
    pub name: String,
    pub capacity: Option<i32>,
    pub corporate: Option<Reference>,
    pub accessory: Option<Reference>,
    pub status: Option<Reference>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Foreign references a classroom row may carry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassroomLinks {
    pub corporate: Option<RecordRef>,
    pub accessory: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

//
// ──────────────────────────────────────────────────────────
// Create Classroom Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateClassroomCommand {
    name: String,
    capacity: Option<i32>,
    links: ClassroomLinks,
}

impl CreateClassroomCommand {
    pub fn new(
        name: Option<String>,
        capacity: Option<i32>,
        links: ClassroomLinks,
    ) -> Result<Self, ServiceError> {
        let name = require(name, errors::NAME_EMPTY)?;

        FieldValidator::new()
            .name_length("name", &name, errors::NAME_LENGTH)
            .finish()?;

        Ok(Self {
            name,
            capacity,
            links,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Option<i32> {
        self.capacity
    }

    pub fn links(&self) -> ClassroomLinks {
        self.links
    }
}

//
// ──────────────────────────────────────────────────────────
// Update Classroom Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateClassroomCommand {
    name: Option<String>,
    capacity: Option<i32>,
    links: ClassroomLinks,
}

impl UpdateClassroomCommand {
    pub fn new(
        name: Option<String>,
        capacity: Option<i32>,
        links: ClassroomLinks,
    ) -> Result<Self, ServiceError> {
        let name = name.map(|n| n.trim().to_string());

        let mut validator = FieldValidator::new();
        if let Some(ref name) = name {
            validator.name_length("name", name, errors::NAME_LENGTH);
        }
        validator.finish()?;

        Ok(Self {
            name,
            capacity,
            links,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn capacity(&self) -> Option<i32> {
        self.capacity
    }

    pub fn links(&self) -> ClassroomLinks {
        self.links
    }
}
