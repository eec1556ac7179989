use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::status::application::domain::entities::StatusView;
use crate::modules::status::application::ports::outgoing::{NewStatus, StatusRepository};
use crate::shared::constants::status_names;
use crate::shared::query::{fetch_records, live, HasStatus, ListRequest, RecordList};
use crate::shared::RepositoryError;

use super::sea_orm_entity::{ActiveModel as StatusActiveModel, Column, Entity as StatusEntity};

/// Resolves a seeded status name to its row key. Every adapter goes through
/// here for soft delete and activation, inside its own transaction when it
/// has one.
pub async fn status_key<C>(db: &C, name: &str) -> Result<i32, RepositoryError>
where
    C: ConnectionTrait,
{
    StatusEntity::find()
        .filter(Column::Name.eq(name))
        .filter(Column::DeletedAt.is_null())
        .one(db)
        .await?
        .map(|status| status.id)
        .ok_or_else(|| RepositoryError::DatabaseError(format!("status '{name}' is not seeded")))
}

/// Soft delete: moves a live row to the `Deleted` status and stamps
/// `deleted_at`. A row that is absent or already deleted is `NotFound`.
pub async fn mark_deleted<E, C>(db: &C, key: i32) -> Result<(), RepositoryError>
where
    E: HasStatus,
    C: ConnectionTrait,
{
    let deleted = status_key(db, status_names::DELETED).await?;
    let now = Utc::now().fixed_offset();

    let result = E::update_many()
        .col_expr(E::status_column(), Expr::value(deleted))
        .col_expr(E::deleted_at_column(), Expr::value(now))
        .col_expr(E::updated_at_column(), Expr::value(now))
        .filter(E::key_column().eq(key))
        .filter(E::deleted_at_column().is_null())
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct StatusRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatusRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatusRepository for StatusRepositoryPostgres {
    async fn create(&self, data: NewStatus) -> Result<StatusView, RepositoryError> {
        let active = StatusActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(data.name),
            is_active: Set(data.is_active),
            is_deleted: Set(data.is_deleted),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await?;

        Ok(inserted.to_view())
    }

    async fn list(&self, request: &ListRequest) -> Result<RecordList<StatusView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<StatusEntity>(), request).await?;

        Ok(records.map(|model| model.to_view()))
    }
}
