use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::modules::auth::application::domain::entities::{Account, UserProfile};
use crate::modules::auth::application::ports::outgoing::AccountRepository;
use crate::modules::location::adapter::outgoing::sea_orm_entity as location;
use crate::modules::role::adapter::outgoing::sea_orm_entity as role;
use crate::modules::status::adapter::outgoing::{sea_orm_entity as status, status_key};
use crate::modules::user::adapter::outgoing::sea_orm_entity::{self as user, Associations};
use crate::shared::constants::status_names;
use crate::shared::query::live;
use crate::shared::RepositoryError;

use super::secure_code_repository_postgres::delete_code;

fn to_account(model: &user::Model, joined: Associations<'_>) -> Account {
    Account {
        key: model.id,
        password_hash: model.password.clone(),
        profile: UserProfile {
            id: model.uuid,
            email: model.email.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            phone_no: model.phone_no.clone(),
            role: joined.role.map(role::Model::to_reference),
            status: joined.status.map(status::Model::to_reference),
            location: joined.location.map(location::Model::to_reference),
        },
    }
}

#[derive(Debug, Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let Some(model) = live::<user::Entity>()
            .filter(Expr::expr(Func::lower(Expr::col(user::Column::Email))).eq(email.to_lowercase()))
            .one(&*self.db)
            .await?
        else {
            return Ok(None);
        };

        let models = vec![model];
        let roles = models.load_one(role::Entity, &*self.db).await?;
        let statuses = models.load_one(status::Entity, &*self.db).await?;
        let locations = models.load_one(location::Entity, &*self.db).await?;

        let joined = Associations {
            role: roles.first().and_then(Option::as_ref),
            location: locations.first().and_then(Option::as_ref),
            status: statuses.first().and_then(Option::as_ref),
        };

        Ok(models.first().map(|m| to_account(m, joined)))
    }

    async fn record_login(&self, user_key: i32) -> Result<(), RepositoryError> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::LastLogin, Expr::value(Utc::now().fixed_offset()))
            .filter(user::Column::Id.eq(user_key))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn complete_password_setup(
        &self,
        user_key: i32,
        password_hash: String,
        code_key: i32,
    ) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        let outcome = async {
            let active = status_key(&txn, status_names::ACTIVE).await?;
            let now = Utc::now().fixed_offset();

            let result = user::Entity::update_many()
                .col_expr(user::Column::Password, Expr::value(password_hash))
                .col_expr(user::Column::StatusId, Expr::value(active))
                .col_expr(user::Column::UpdatedAt, Expr::value(now))
                .filter(user::Column::Id.eq(user_key))
                .filter(user::Column::DeletedAt.is_null())
                .exec(&txn)
                .await?;

            if result.rows_affected == 0 {
                return Err(RepositoryError::NotFound);
            }

            delete_code(&txn, code_key).await
        }
        .await;

        if let Err(e) = outcome {
            warn!(user_key, error = %e, "password setup failed, rolling back");
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await?;
        Ok(())
    }
}
