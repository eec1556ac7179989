// src/shared/validation.rs
use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::constants::{
    errors, MAX_NAME_LENGTH, MAX_PHONE_LENGTH, MAX_PINCODE_DIGITS, MIN_NAME_LENGTH,
    MIN_PHONE_LENGTH, MIN_PINCODE_DIGITS,
};
use crate::shared::service_error::{FieldErrors, ServiceError};

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000)$",
    )
    .expect("uuid pattern is valid")
});

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

/// `None`, empty and whitespace-only values all count as empty.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

pub fn is_valid_uuid(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// Returns the trimmed value or a `BadRequest` with `message`.
pub fn require(value: Option<String>, message: &str) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ServiceError::bad_request(message)),
    }
}

/// Accumulates per-field rule violations and turns them into a
/// `ServiceError::Validation` at the end.
#[derive(Debug, Default)]
pub struct FieldValidator {
    errors: FieldErrors,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_length(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        let len = value.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len) {
            self.push(field, message);
        }
        self
    }

    pub fn phone(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            if !DIGITS_RE.is_match(value) {
                self.push(field, errors::PHONE_NUMBER_NUMERIC);
            } else if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&value.len()) {
                self.push(field, errors::PHONE_NUMBER_LENGTH);
            }
        }
        self
    }

    pub fn pincode(&mut self, field: &str, value: Option<i32>) -> &mut Self {
        if let Some(value) = value {
            let digits = if value < 0 { 0 } else { value.to_string().len() };
            if value < 0 || !(MIN_PINCODE_DIGITS..=MAX_PINCODE_DIGITS).contains(&digits) {
                self.push(field, errors::INVALID_PINCODE);
            }
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !EmailAddress::is_valid(value) {
            self.push(field, errors::INVALID_EMAIL_ADDRESS);
        }
        self
    }

    fn push(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn finish(&mut self) -> Result<(), ServiceError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}
