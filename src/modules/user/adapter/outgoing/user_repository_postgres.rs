use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, Condition, ConnectionTrait, DatabaseConnection, LoaderTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::store_code;
use crate::modules::auth::application::domain::entities::ActivationCode;
use crate::modules::location::adapter::outgoing::sea_orm_entity as location;
use crate::modules::role::adapter::outgoing::{role_key, sea_orm_entity as role};
use crate::modules::status::adapter::outgoing::{mark_deleted, sea_orm_entity as status, status_key};
use crate::modules::user::application::domain::entities::UserView;
use crate::modules::user::application::ports::outgoing::{NewUser, UserChanges, UserRepository};
use crate::shared::constants::{role_names, status_names};
use crate::shared::query::{
    fetch_records, live, live_by_ref, resolve_optional_key, ListRequest, RecordList,
};
use crate::shared::{RecordRef, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Associations, Column, Entity as UserEntity, Model as UserModel,
};

async fn insert_user<C>(
    db: &C,
    data: NewUser,
    code: &ActivationCode,
) -> Result<UserModel, RepositoryError>
where
    C: ConnectionTrait,
{
    let role_id = resolve_optional_key::<role::Entity, _>(db, data.role.as_ref()).await?;
    let location_id =
        resolve_optional_key::<location::Entity, _>(db, data.location.as_ref()).await?;
    let inactive = status_key(db, status_names::INACTIVE).await?;

    let active = UserActiveModel {
        uuid: Set(Uuid::new_v4()),
        first_name: Set(data.first_name),
        last_name: Set(data.last_name),
        email: Set(data.email),
        password: Set(data.password_hash),
        phone_no: Set(data.phone_no),
        role_id: Set(role_id),
        location_id: Set(location_id),
        status_id: Set(Some(inactive)),
        ..Default::default()
    };

    let inserted = active.insert(db).await?;
    store_code(db, inserted.id, code).await?;

    Ok(inserted)
}

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_views(&self, models: Vec<UserModel>) -> Result<Vec<UserView>, RepositoryError> {
        let roles = models.load_one(role::Entity, &*self.db).await?;
        let statuses = models.load_one(status::Entity, &*self.db).await?;
        let locations = models.load_one(location::Entity, &*self.db).await?;

        Ok(models
            .iter()
            .zip(roles.iter())
            .zip(statuses.iter())
            .zip(locations.iter())
            .map(|(((user, role), status), location)| {
                user.to_view(Associations {
                    role: role.as_ref(),
                    location: location.as_ref(),
                    status: status.as_ref(),
                })
            })
            .collect())
    }

    async fn to_view(&self, model: UserModel) -> Result<UserView, RepositoryError> {
        self.to_views(vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(
        &self,
        data: NewUser,
        code: &ActivationCode,
    ) -> Result<UserView, RepositoryError> {
        let txn = self.db.begin().await?;

        let inserted = match insert_user(&txn, data, code).await {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, "user create failed, rolling back");
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await?;

        self.to_view(inserted).await
    }

    async fn create_super_admin(&self, data: NewUser) -> Result<UserView, RepositoryError> {
        let db = &*self.db;
        let role_id = role_key(db, role_names::SUPER_ADMIN).await?;
        let active = status_key(db, status_names::ACTIVE).await?;

        let inserted = UserActiveModel {
            uuid: Set(Uuid::new_v4()),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            password: Set(data.password_hash),
            phone_no: Set(data.phone_no),
            role_id: Set(Some(role_id)),
            status_id: Set(Some(active)),
            ..Default::default()
        }
        .insert(db)
        .await?;

        self.to_view(inserted).await
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let matches = live::<UserEntity>()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Email))).eq(email.to_lowercase()))
            .count(&*self.db)
            .await?;

        Ok(matches > 0)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<UserView>, RepositoryError> {
        let pattern = format!("%{pattern}%");
        let models = live::<UserEntity>()
            .filter(
                Condition::any()
                    .add(Expr::col(Column::FirstName).ilike(&pattern))
                    .add(Expr::col(Column::LastName).ilike(&pattern))
                    .add(Expr::col(Column::Email).ilike(&pattern)),
            )
            .all(&*self.db)
            .await?;

        self.to_views(models).await
    }

    async fn find(&self, user: &RecordRef) -> Result<Option<UserView>, RepositoryError> {
        match live_by_ref::<UserEntity>(user).one(&*self.db).await? {
            Some(model) => self.to_view(model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, request: &ListRequest) -> Result<RecordList<UserView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<UserEntity>(), request).await?;

        let (models, count) = records.into_parts();
        let views = self.to_views(models).await?;

        Ok(RecordList::from_parts(views, count))
    }

    async fn update(&self, key: i32, changes: UserChanges) -> Result<UserView, RepositoryError> {
        let model = live_by_ref::<UserEntity>(&RecordRef::Key(key))
            .one(&*self.db)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let db = &*self.db;
        let role_id = resolve_optional_key::<role::Entity, _>(db, changes.role.as_ref()).await?;
        let location_id =
            resolve_optional_key::<location::Entity, _>(db, changes.location.as_ref()).await?;
        let status_id =
            resolve_optional_key::<status::Entity, _>(db, changes.status.as_ref()).await?;

        let mut active: UserActiveModel = model.into();
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(phone_no) = changes.phone_no {
            active.phone_no = Set(Some(phone_no));
        }
        if let Some(hash) = changes.password_hash {
            active.password = Set(Some(hash));
        }
        if role_id.is_some() {
            active.role_id = Set(role_id);
        }
        if location_id.is_some() {
            active.location_id = Set(location_id);
        }
        if status_id.is_some() {
            active.status_id = Set(status_id);
        }

        let updated = active.update(db).await?;

        self.to_view(updated).await
    }

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError> {
        mark_deleted::<UserEntity, _>(&*self.db, key).await
    }
}
