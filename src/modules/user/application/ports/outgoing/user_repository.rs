use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::ActivationCode;
use crate::modules::user::application::domain::entities::UserView;
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_no: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<RecordRef>,
    pub location: Option<RecordRef>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<RecordRef>,
    pub location: Option<RecordRef>,
    pub status: Option<RecordRef>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user in the `Inactive` status together with its
    /// activation code, in one transaction.
    async fn create(&self, data: NewUser, code: &ActivationCode)
        -> Result<UserView, RepositoryError>;

    /// Inserts an already activated user holding the seeded super admin
    /// role. `data.role` and `data.location` are ignored.
    async fn create_super_admin(&self, data: NewUser) -> Result<UserView, RepositoryError>;

    /// Case-insensitive match among live users.
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Substring match on first name, last name or email.
    async fn search(&self, pattern: &str) -> Result<Vec<UserView>, RepositoryError>;

    async fn find(&self, user: &RecordRef) -> Result<Option<UserView>, RepositoryError>;

    async fn list(&self, request: &ListRequest) -> Result<RecordList<UserView>, RepositoryError>;

    async fn update(&self, key: i32, changes: UserChanges) -> Result<UserView, RepositoryError>;

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError>;
}
