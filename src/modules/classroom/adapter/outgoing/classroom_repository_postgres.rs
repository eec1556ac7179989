use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, LoaderTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::accessory::adapter::outgoing::sea_orm_entity as accessory;
use crate::modules::classroom::application::domain::entities::ClassroomView;
use crate::modules::classroom::application::ports::outgoing::{
    ClassroomChanges, ClassroomRepository, NewClassroom,
};
use crate::modules::corporate::adapter::outgoing::sea_orm_entity as corporate;
use crate::modules::status::adapter::outgoing::{mark_deleted, sea_orm_entity as status};
use crate::shared::query::{
    fetch_records, live, live_by_ref, resolve_optional_key, ListRequest, RecordList,
};
use crate::shared::{RecordRef, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as ClassroomActiveModel, Associations, Column, Entity as ClassroomEntity,
    Model as ClassroomModel,
};

/// Inserts one classroom on any connection, so a corporate write can run it
/// inside its own transaction. `corporate_id` is an already resolved key.
pub async fn insert_classroom<C>(
    db: &C,
    data: NewClassroom,
    corporate_id: Option<i32>,
) -> Result<ClassroomModel, RepositoryError>
where
    C: ConnectionTrait,
{
    let accessory_id =
        resolve_optional_key::<accessory::Entity, _>(db, data.links.accessory.as_ref()).await?;
    let status_id =
        resolve_optional_key::<status::Entity, _>(db, data.links.status.as_ref()).await?;

    let active = ClassroomActiveModel {
        uuid: Set(Uuid::new_v4()),
        name: Set(data.name),
        capacity: Set(data.capacity),
        corporate_id: Set(corporate_id),
        accessory_id: Set(accessory_id),
        status_id: Set(status_id),
        ..Default::default()
    };

    Ok(active.insert(db).await?)
}

/// Merges the supplied fields into `model`. `corporate_id`, when present, is
/// an already resolved key; `changes.links.corporate` is not looked at.
pub async fn apply_classroom_changes<C>(
    db: &C,
    model: ClassroomModel,
    changes: ClassroomChanges,
    corporate_id: Option<i32>,
) -> Result<ClassroomModel, RepositoryError>
where
    C: ConnectionTrait,
{
    let accessory_id =
        resolve_optional_key::<accessory::Entity, _>(db, changes.links.accessory.as_ref()).await?;
    let status_id =
        resolve_optional_key::<status::Entity, _>(db, changes.links.status.as_ref()).await?;

    let mut active: ClassroomActiveModel = model.into();
    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(capacity) = changes.capacity {
        active.capacity = Set(Some(capacity));
    }
    if let Some(corporate_id) = corporate_id {
        active.corporate_id = Set(Some(corporate_id));
    }
    if let Some(accessory_id) = accessory_id {
        active.accessory_id = Set(Some(accessory_id));
    }
    if let Some(status_id) = status_id {
        active.status_id = Set(Some(status_id));
    }

    Ok(active.update(db).await?)
}

#[derive(Debug, Clone)]
pub struct ClassroomRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ClassroomRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_views(
        &self,
        models: Vec<ClassroomModel>,
    ) -> Result<Vec<ClassroomView>, RepositoryError> {
        let statuses = models.load_one(status::Entity, &*self.db).await?;
        let accessories = models.load_one(accessory::Entity, &*self.db).await?;
        let corporates = models.load_one(corporate::Entity, &*self.db).await?;

        Ok(models
            .iter()
            .enumerate()
            .map(|(i, classroom)| {
                classroom.to_view(Associations {
                    corporate: corporates.get(i).and_then(Option::as_ref),
                    accessory: accessories.get(i).and_then(Option::as_ref),
                    status: statuses.get(i).and_then(Option::as_ref),
                })
            })
            .collect())
    }

    async fn to_view(&self, model: ClassroomModel) -> Result<ClassroomView, RepositoryError> {
        self.to_views(vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ClassroomRepository for ClassroomRepositoryPostgres {
    async fn create(&self, data: NewClassroom) -> Result<ClassroomView, RepositoryError> {
        let corporate_id =
            resolve_optional_key::<corporate::Entity, _>(&*self.db, data.links.corporate.as_ref())
                .await?;

        let inserted = insert_classroom(&*self.db, data, corporate_id).await?;

        self.to_view(inserted).await
    }

    async fn search(&self, pattern: &str) -> Result<Vec<ClassroomView>, RepositoryError> {
        let models = live::<ClassroomEntity>()
            .filter(Expr::col(Column::Name).ilike(format!("%{pattern}%")))
            .all(&*self.db)
            .await?;

        self.to_views(models).await
    }

    async fn find(&self, classroom: &RecordRef) -> Result<Option<ClassroomView>, RepositoryError> {
        match live_by_ref::<ClassroomEntity>(classroom).one(&*self.db).await? {
            Some(model) => self.to_view(model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        request: &ListRequest,
    ) -> Result<RecordList<ClassroomView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<ClassroomEntity>(), request).await?;

        let (models, count) = records.into_parts();
        let views = self.to_views(models).await?;

        Ok(RecordList::from_parts(views, count))
    }

    async fn update(
        &self,
        key: i32,
        changes: ClassroomChanges,
    ) -> Result<ClassroomView, RepositoryError> {
        let model = live_by_ref::<ClassroomEntity>(&RecordRef::Key(key))
            .one(&*self.db)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let corporate_id = resolve_optional_key::<corporate::Entity, _>(
            &*self.db,
            changes.links.corporate.as_ref(),
        )
        .await?;

        let updated = apply_classroom_changes(&*self.db, model, changes, corporate_id).await?;

        self.to_view(updated).await
    }

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError> {
        mark_deleted::<ClassroomEntity, _>(&*self.db, key).await
    }
}
