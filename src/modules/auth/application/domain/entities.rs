use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::status_names;
use crate::shared::Reference;

/// Number of random bytes behind an activation code (hex encoded to 32 chars).
const ACTIVATION_CODE_BYTES: usize = 16;

/// One-time code mailed to a user to set up or reset the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl ActivationCode {
    pub fn issue(ttl: Duration) -> Self {
        let mut bytes = [0u8; ACTIVATION_CODE_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        Self {
            code: bytes.iter().map(|b| format!("{b:02x}")).collect(),
            expires_at: Utc::now() + ttl,
        }
    }
}

/// A persisted activation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCode {
    pub key: i32,
    pub user_key: i32,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl StoredCode {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// What a successful login hands back about the user.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone_no: Option<String>,
    pub role: Option<Reference>,
    pub status: Option<Reference>,
    pub location: Option<Reference>,
}

/// A live user as seen by the credential checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub key: i32,
    pub password_hash: Option<String>,
    pub profile: UserProfile,
}

impl Account {
    pub fn is_inactive(&self) -> bool {
        self.profile
            .status
            .as_ref()
            .is_some_and(|s| s.name == status_names::INACTIVE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserProfile,
}
