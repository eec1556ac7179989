use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::errors;
use crate::shared::validation::{require, FieldValidator};
use crate::shared::{RecordRef, Reference, ServiceError};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorporateView {
    #[serde(skip)]
    pub key: i32,
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact_no: Option<String>,
    pub street: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
    pub capacity: Option<i32>,
    pub location: Option<Reference>,
    pub status: Option<Reference>,
    pub classrooms: Vec<CorporateClassroom>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Live classroom as listed under its corporate.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CorporateClassroom {
    pub id: Uuid,
    pub name: String,
    pub capacity: Option<i32>,
}

/// Optional columns shared by create and update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorporateDetails {
    pub contact_no: Option<String>,
    pub street: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<i32>,
    pub capacity: Option<i32>,
    pub location: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

impl CorporateDetails {
    fn normalized(self) -> Self {
        Self {
            contact_no: trimmed(self.contact_no),
            street: trimmed(self.street),
            landmark: trimmed(self.landmark),
            city: trimmed(self.city),
            ..self
        }
    }

    fn validate(&self, validator: &mut FieldValidator) {
        validator
            .phone("contactNo", self.contact_no.as_deref())
            .pincode("pincode", self.pincode);
    }
}

/// One element of the nested `classroom` array. An entry with an `id`
/// edits an existing classroom of the corporate, one without creates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassroomInput {
    pub id: Option<RecordRef>,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub accessory: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomDraft {
    pub name: String,
    pub capacity: Option<i32>,
    pub accessory: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomEdit {
    pub id: RecordRef,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub accessory: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

fn draft(
    index: usize,
    input: ClassroomInput,
    validator: &mut FieldValidator,
) -> Result<ClassroomDraft, ServiceError> {
    let name = require(input.name, errors::NAME_EMPTY)?;
    validator.name_length(&format!("classroom[{index}].name"), &name, errors::NAME_LENGTH);

    Ok(ClassroomDraft {
        name,
        capacity: input.capacity,
        accessory: input.accessory,
        status: input.status,
    })
}

//
// ──────────────────────────────────────────────────────────
// Create Corporate Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCorporateCommand {
    name: String,
    email: String,
    details: CorporateDetails,
    classrooms: Vec<ClassroomDraft>,
}

impl CreateCorporateCommand {
    /// Every classroom entry is created, so each one needs a name.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        details: CorporateDetails,
        classrooms: Vec<ClassroomInput>,
    ) -> Result<Self, ServiceError> {
        let name = require(name, errors::NAME_EMPTY)?;
        let email = require(email, errors::EMAIL_EMPTY)?;
        let details = details.normalized();

        let mut validator = FieldValidator::new();
        validator
            .name_length("name", &name, errors::NAME_LENGTH)
            .email("email", &email);
        details.validate(&mut validator);

        let classrooms = classrooms
            .into_iter()
            .enumerate()
            .map(|(i, input)| draft(i, input, &mut validator))
            .collect::<Result<Vec<_>, _>>()?;

        validator.finish()?;

        Ok(Self {
            name,
            email,
            details,
            classrooms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn details(&self) -> &CorporateDetails {
        &self.details
    }

    pub fn classrooms(&self) -> &[ClassroomDraft] {
        &self.classrooms
    }
}

//
// ──────────────────────────────────────────────────────────
// Update Corporate Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateCorporateCommand {
    name: Option<String>,
    email: Option<String>,
    details: CorporateDetails,
    new_classrooms: Vec<ClassroomDraft>,
    edited_classrooms: Vec<ClassroomEdit>,
}

impl UpdateCorporateCommand {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        details: CorporateDetails,
        classrooms: Vec<ClassroomInput>,
    ) -> Result<Self, ServiceError> {
        let name = name.map(|n| n.trim().to_string());
        let email = email.map(|e| e.trim().to_string());
        let details = details.normalized();

        let mut validator = FieldValidator::new();
        if let Some(ref name) = name {
            validator.name_length("name", name, errors::NAME_LENGTH);
        }
        if let Some(ref email) = email {
            validator.email("email", email);
        }
        details.validate(&mut validator);

        let mut new_classrooms = Vec::new();
        let mut edited_classrooms = Vec::new();
        for (i, input) in classrooms.into_iter().enumerate() {
            match input.id {
                Some(id) => {
                    let name = input.name.map(|n| n.trim().to_string());
                    if let Some(ref name) = name {
                        validator.name_length(
                            &format!("classroom[{i}].name"),
                            name,
                            errors::NAME_LENGTH,
                        );
                    }
                    edited_classrooms.push(ClassroomEdit {
                        id,
                        name,
                        capacity: input.capacity,
                        accessory: input.accessory,
                        status: input.status,
                    });
                }
                None => new_classrooms.push(draft(i, input, &mut validator)?),
            }
        }

        validator.finish()?;

        Ok(Self {
            name,
            email,
            details,
            new_classrooms,
            edited_classrooms,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn details(&self) -> &CorporateDetails {
        &self.details
    }

    pub fn new_classrooms(&self) -> &[ClassroomDraft] {
        &self.new_classrooms
    }

    pub fn edited_classrooms(&self) -> &[ClassroomEdit] {
        &self.edited_classrooms
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom(id: Option<RecordRef>, name: Option<&str>) -> ClassroomInput {
        ClassroomInput {
            id,
            name: name.map(str::to_string),
            capacity: Some(25),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_requires_name_then_email() {
        assert_eq!(
            CreateCorporateCommand::new(None, Some("a@b.com".into()), Default::default(), vec![]),
            Err(ServiceError::bad_request(errors::NAME_EMPTY))
        );
        assert_eq!(
            CreateCorporateCommand::new(Some("Acme".into()), None, Default::default(), vec![]),
            Err(ServiceError::bad_request(errors::EMAIL_EMPTY))
        );
    }

    #[test]
    fn test_create_collects_field_errors() {
        let details = CorporateDetails {
            contact_no: Some("12ab".into()),
            pincode: Some(12),
            ..Default::default()
        };

        let err = CreateCorporateCommand::new(
            Some("Acme".into()),
            Some("not-an-email".into()),
            details,
            vec![],
        )
        .unwrap_err();

        match err {
            ServiceError::Validation(fields) => {
                assert_eq!(fields["email"], errors::INVALID_EMAIL_ADDRESS);
                assert_eq!(fields["contactNo"], errors::PHONE_NUMBER_NUMERIC);
                assert_eq!(fields["pincode"], errors::INVALID_PINCODE);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_classroom_names() {
        let result = CreateCorporateCommand::new(
            Some("Acme".into()),
            Some("hello@acme.com".into()),
            Default::default(),
            vec![classroom(None, Some("Hall A")), classroom(None, None)],
        );

        assert_eq!(result, Err(ServiceError::bad_request(errors::NAME_EMPTY)));
    }

    #[test]
    fn test_create_reports_classroom_index() {
        let err = CreateCorporateCommand::new(
            Some("Acme".into()),
            Some("hello@acme.com".into()),
            Default::default(),
            vec![classroom(None, Some("Hall A")), classroom(None, Some("B"))],
        )
        .unwrap_err();

        assert_eq!(err, ServiceError::field("classroom[1].name", errors::NAME_LENGTH));
    }

    #[test]
    fn test_create_blank_details_become_absent() {
        let details = CorporateDetails {
            street: Some("  ".into()),
            city: Some(" Pune ".into()),
            ..Default::default()
        };

        let command = CreateCorporateCommand::new(
            Some("Acme".into()),
            Some("hello@acme.com".into()),
            details,
            vec![],
        )
        .unwrap();

        assert_eq!(command.details().street, None);
        assert_eq!(command.details().city.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_update_partitions_classrooms() {
        let command = UpdateCorporateCommand::new(
            None,
            None,
            Default::default(),
            vec![
                classroom(Some(RecordRef::Key(4)), None),
                classroom(None, Some("Hall C")),
                classroom(Some(RecordRef::Key(5)), Some("Hall D")),
            ],
        )
        .unwrap();

        assert_eq!(command.edited_classrooms().len(), 2);
        assert_eq!(command.edited_classrooms()[0].id, RecordRef::Key(4));
        assert_eq!(command.edited_classrooms()[0].name, None);
        assert_eq!(command.new_classrooms().len(), 1);
        assert_eq!(command.new_classrooms()[0].name, "Hall C");
    }

    #[test]
    fn test_update_validates_supplied_email() {
        assert_eq!(
            UpdateCorporateCommand::new(None, Some("nope".into()), Default::default(), vec![]),
            Err(ServiceError::field("email", errors::INVALID_EMAIL_ADDRESS))
        );
    }
}
