use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, LoaderTrait, PaginatorTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::location::application::domain::entities::LocationView;
use crate::modules::location::application::ports::outgoing::{NewLocation, LocationChanges, LocationRepository};
use crate::modules::status::adapter::outgoing::{mark_deleted, sea_orm_entity as status};
use crate::shared::query::{
    fetch_records, live, live_by_ref, resolve_optional_key, ListRequest, RecordList,
};
use crate::shared::{RecordRef, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as LocationActiveModel, Column, Entity as LocationEntity, Model as LocationModel,
};

#[derive(Debug, Clone)]
pub struct LocationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LocationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_views(&self, models: Vec<LocationModel>) -> Result<Vec<LocationView>, RepositoryError> {
        let statuses = models.load_one(status::Entity, &*self.db).await?;

        Ok(models
            .iter()
            .zip(statuses.iter())
            .map(|(location, status)| location.to_view(status.as_ref()))
            .collect())
    }

    async fn to_view(&self, model: LocationModel) -> Result<LocationView, RepositoryError> {
        self.to_views(vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl LocationRepository for LocationRepositoryPostgres {
    async fn create(&self, data: NewLocation) -> Result<LocationView, RepositoryError> {
        let status_id =
            resolve_optional_key::<status::Entity, _>(&*self.db, data.status.as_ref()).await?;

        let active = LocationActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(data.name),
            state: Set(data.state),
            status_id: Set(status_id),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await?;

        self.to_view(inserted).await
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError> {
        let matches = live::<LocationEntity>()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()))
            .count(&*self.db)
            .await?;

        Ok(matches > 0)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<LocationView>, RepositoryError> {
        let models = live::<LocationEntity>()
            .filter(Expr::col(Column::Name).ilike(format!("%{pattern}%")))
            .all(&*self.db)
            .await?;

        self.to_views(models).await
    }

    async fn find(&self, location: &RecordRef) -> Result<Option<LocationView>, RepositoryError> {
        match live_by_ref::<LocationEntity>(location).one(&*self.db).await? {
            Some(model) => self.to_view(model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, request: &ListRequest) -> Result<RecordList<LocationView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<LocationEntity>(), request).await?;

        let (models, count) = records.into_parts();
        let views = self.to_views(models).await?;

        Ok(RecordList::from_parts(views, count))
    }

    async fn update(&self, key: i32, changes: LocationChanges) -> Result<LocationView, RepositoryError> {
        let model = live_by_ref::<LocationEntity>(&RecordRef::Key(key))
            .one(&*self.db)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let status_id =
            resolve_optional_key::<status::Entity, _>(&*self.db, changes.status.as_ref()).await?;

        let mut active: LocationActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(state) = changes.state {
            active.state = Set(Some(state));
        }
        if let Some(status_id) = status_id {
            active.status_id = Set(Some(status_id));
        }

        let updated = active.update(&*self.db).await?;

        self.to_view(updated).await
    }

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError> {
        mark_deleted::<LocationEntity, _>(&*self.db, key).await
    }
}
