use async_trait::async_trait;

use crate::modules::classroom::application::domain::entities::{ClassroomLinks, ClassroomView};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::{RecordRef, RepositoryError};

#[derive(Debug, Clone, PartialEq)]
pub struct NewClassroom {
    pub name: String,
    pub capacity: Option<i32>,
    pub links: ClassroomLinks,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassroomChanges {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub links: ClassroomLinks,
}

#[async_trait]
pub trait ClassroomRepository: Send + Sync {
    async fn create(&self, data: NewClassroom) -> Result<ClassroomView, RepositoryError>;

    async fn search(&self, pattern: &str) -> Result<Vec<ClassroomView>, RepositoryError>;

    async fn find(&self, classroom: &RecordRef) -> Result<Option<ClassroomView>, RepositoryError>;

    async fn list(
        &self,
        request: &ListRequest,
    ) -> Result<RecordList<ClassroomView>, RepositoryError>;

    async fn update(
        &self,
        key: i32,
        changes: ClassroomChanges,
    ) -> Result<ClassroomView, RepositoryError>;

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError>;
}
