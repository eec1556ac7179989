use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::is_valid_uuid;

/// Identifier accepted by every lookup: either the public uuid or the
/// internal numeric key. Only the uuid is ever written back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Key(i32),
    Public(Uuid),
}

impl RecordRef {
    /// Branches on shape: uuid first, then a plain integer.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if is_valid_uuid(raw) {
            return Uuid::parse_str(raw).ok().map(RecordRef::Public);
        }
        raw.parse::<i32>().ok().map(RecordRef::Key)
    }
}

impl From<Uuid> for RecordRef {
    fn from(id: Uuid) -> Self {
        RecordRef::Public(id)
    }
}

impl<'de> Deserialize<'de> for RecordRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => i32::try_from(n)
                .map(RecordRef::Key)
                .map_err(|_| serde::de::Error::custom("identifier out of range")),
            Raw::Text(s) => RecordRef::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid identifier: {s}"))),
        }
    }
}

/// Public projection of an associated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Reference {
    pub id: Uuid,
    pub name: String,
}
