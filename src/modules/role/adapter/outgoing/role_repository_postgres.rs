use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::role::application::domain::entities::RoleView;
use crate::modules::role::application::ports::outgoing::{NewRole, RoleChanges, RoleRepository};
use crate::modules::status::adapter::outgoing::{mark_deleted, sea_orm_entity as status};
use crate::shared::query::{
    fetch_records, live, live_by_ref, resolve_optional_key, ListRequest, RecordList,
};
use crate::shared::{RecordRef, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as RoleActiveModel, Column, Entity as RoleEntity, Model as RoleModel,
};

/// Key of a seeded role, looked up by its exact name.
pub async fn role_key<C>(db: &C, name: &str) -> Result<i32, RepositoryError>
where
    C: ConnectionTrait,
{
    RoleEntity::find()
        .filter(Column::Name.eq(name))
        .filter(Column::DeletedAt.is_null())
        .one(db)
        .await?
        .map(|role| role.id)
        .ok_or_else(|| RepositoryError::DatabaseError(format!("role '{name}' is not seeded")))
}

#[derive(Debug, Clone)]
pub struct RoleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_views(&self, models: Vec<RoleModel>) -> Result<Vec<RoleView>, RepositoryError> {
        let statuses = models.load_one(status::Entity, &*self.db).await?;

        Ok(models
            .iter()
            .zip(statuses.iter())
            .map(|(role, status)| role.to_view(status.as_ref()))
            .collect())
    }

    async fn to_view(&self, model: RoleModel) -> Result<RoleView, RepositoryError> {
        self.to_views(vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl RoleRepository for RoleRepositoryPostgres {
    async fn create(&self, data: NewRole) -> Result<RoleView, RepositoryError> {
        let status_id =
            resolve_optional_key::<status::Entity, _>(&*self.db, data.status.as_ref()).await?;

        let active = RoleActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(data.name),
            status_id: Set(status_id),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await?;

        self.to_view(inserted).await
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepositoryError> {
        let matches = live::<RoleEntity>()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()))
            .count(&*self.db)
            .await?;

        Ok(matches > 0)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<RoleView>, RepositoryError> {
        let models = live::<RoleEntity>()
            .filter(Expr::col(Column::Name).ilike(format!("%{pattern}%")))
            .all(&*self.db)
            .await?;

        self.to_views(models).await
    }

    async fn find(&self, role: &RecordRef) -> Result<Option<RoleView>, RepositoryError> {
        match live_by_ref::<RoleEntity>(role).one(&*self.db).await? {
            Some(model) => self.to_view(model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, request: &ListRequest) -> Result<RecordList<RoleView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<RoleEntity>(), request).await?;

        let (models, count) = records.into_parts();
        let views = self.to_views(models).await?;

        Ok(RecordList::from_parts(views, count))
    }

    async fn update(&self, key: i32, changes: RoleChanges) -> Result<RoleView, RepositoryError> {
        let model = live_by_ref::<RoleEntity>(&RecordRef::Key(key))
            .one(&*self.db)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let status_id =
            resolve_optional_key::<status::Entity, _>(&*self.db, changes.status.as_ref()).await?;

        let mut active: RoleActiveModel = model.into();
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
        mark_deleted::<RoleEntity, _>(&*self.db, key).await
    }
}
