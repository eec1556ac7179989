use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, LoaderTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::accessory::application::domain::entities::AccessoryView;
use crate::modules::accessory::application::ports::outgoing::{NewAccessory, AccessoryChanges, AccessoryRepository};
use crate::modules::status::adapter::outgoing::{mark_deleted, sea_orm_entity as status};
use crate::shared::query::{
    fetch_records, live, live_by_ref, resolve_optional_key, ListRequest, RecordList,
};
use crate::shared::{RecordRef, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as AccessoryActiveModel, Column, Entity as AccessoryEntity, Model as AccessoryModel,
};

#[derive(Debug, Clone)]
pub struct AccessoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccessoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_views(&self, models: Vec<AccessoryModel>) -> Result<Vec<AccessoryView>, RepositoryError> {
        let statuses = models.load_one(status::Entity, &*self.db).await?;

        Ok(models
            .iter()
            .zip(statuses.iter())
            .map(|(accessory, status)| accessory.to_view(status.as_ref()))
            .collect())
    }

    async fn to_view(&self, model: AccessoryModel) -> Result<AccessoryView, RepositoryError> {
        self.to_views(vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl AccessoryRepository for AccessoryRepositoryPostgres {
    async fn create(&self, data: NewAccessory) -> Result<AccessoryView, RepositoryError> {
        let status_id =
            resolve_optional_key::<status::Entity, _>(&*self.db, data.status.as_ref()).await?;

        let active = AccessoryActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(data.name),
            status_id: Set(status_id),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await?;

        self.to_view(inserted).await
    }

    async fn search(&self, pattern: &str) -> Result<Vec<AccessoryView>, RepositoryError> {
        let models = live::<AccessoryEntity>()
            .filter(Expr::col(Column::Name).ilike(format!("%{pattern}%")))
            .all(&*self.db)
            .await?;

        self.to_views(models).await
    }

    async fn find(&self, accessory: &RecordRef) -> Result<Option<AccessoryView>, RepositoryError> {
        match live_by_ref::<AccessoryEntity>(accessory).one(&*self.db).await? {
            Some(model) => self.to_view(model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, request: &ListRequest) -> Result<RecordList<AccessoryView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<AccessoryEntity>(), request).await?;

        let (models, count) = records.into_parts();
        let views = self.to_views(models).await?;

        Ok(RecordList::from_parts(views, count))
    }

    async fn update(&self, key: i32, changes: AccessoryChanges) -> Result<AccessoryView, RepositoryError> {
        let model = live_by_ref::<AccessoryEntity>(&RecordRef::Key(key))
            .one(&*self.db)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let status_id =
            resolve_optional_key::<status::Entity, _>(&*self.db, changes.status.as_ref()).await?;

        let mut active: AccessoryActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(status_id) = status_id {
            active.status_id = Set(Some(status_id));
        }

        let updated = active.update(&*self.db).await?;

        self.to_view(updated).await
    }

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError> {
        mark_deleted::<AccessoryEntity, _>(&*self.db, key).await
    }
}
