use async_trait::async_trait;

use crate::modules::classroom::application::ports::outgoing::{ClassroomChanges, NewClassroom};
use crate::modules::corporate::application::domain::entities::{CorporateDetails, CorporateView};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError};

/// Corporate row plus the classrooms created with it. The classrooms'
/// own corporate link is ignored; they always point at the new row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCorporate {
    pub name: String,
    pub email: String,
    pub details: CorporateDetails,
    pub classrooms: Vec<NewClassroom>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorporateChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub details: CorporateDetails,
    pub new_classrooms: Vec<NewClassroom>,
    /// Each target must be a live classroom of this corporate.
    pub edited_classrooms: Vec<(RecordRef, ClassroomChanges)>,
}

#[async_trait]
pub trait CorporateRepository: Send + Sync {
    /// Inserts the corporate and its classrooms in one transaction.
    async fn create(&self, data: NewCorporate) -> Result<CorporateView, RepositoryError>;

    /// Case-insensitive match among live corporates.
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;

    async fn search(&self, pattern: &str) -> Result<Vec<CorporateView>, RepositoryError>;

    async fn find(&self, corporate: &RecordRef) -> Result<Option<CorporateView>, RepositoryError>;

    async fn list(
        &self,
        request: &ListRequest,
    ) -> Result<RecordList<CorporateView>, RepositoryError>;

    /// Edits, then creates classrooms, then updates the corporate row, all
    /// in one transaction.
    async fn update(
        &self,
        key: i32,
        changes: CorporateChanges,
    ) -> Result<CorporateView, RepositoryError>;

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError>;
}
