use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::modules::auth::application::domain::entities::{ActivationCode, StoredCode};
use crate::modules::auth::application::ports::outgoing::SecureCodeRepository;
use crate::shared::RepositoryError;

use super::sea_orm_entity::{ActiveModel as SecureCodeActiveModel, Column, Entity as SecureCodeEntity};

/// Replaces the user's activation code with `code`. Runs on whatever
/// connection it is given so user creation can call it inside its own
/// transaction.
pub async fn store_code<C>(db: &C, user_key: i32, code: &ActivationCode) -> Result<(), RepositoryError>
where
    C: ConnectionTrait,
{
    SecureCodeEntity::delete_many()
        .filter(Column::UserId.eq(user_key))
        .exec(db)
        .await?;

    let active = SecureCodeActiveModel {
        user_id: Set(user_key),
        activation_code: Set(code.code.clone()),
        expires_at: Set(code.expires_at.fixed_offset()),
        ..Default::default()
    };
    active.insert(db).await?;

    Ok(())
}

/// Deletes a consumed or expired code.
pub async fn delete_code<C>(db: &C, code_key: i32) -> Result<(), RepositoryError>
where
    C: ConnectionTrait,
{
    let result = SecureCodeEntity::delete_by_id(code_key).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct SecureCodeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SecureCodeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SecureCodeRepository for SecureCodeRepositoryPostgres {
    async fn find_by_code(&self, code: &str) -> Result<Option<StoredCode>, RepositoryError> {
        let model = SecureCodeEntity::find()
            .filter(Column::ActivationCode.eq(code))
            .one(&*self.db)
            .await?;

        Ok(model.map(|m| m.to_stored()))
    }

    async fn find_for_user(&self, user_key: i32) -> Result<Option<StoredCode>, RepositoryError> {
        let model = SecureCodeEntity::find()
            .filter(Column::UserId.eq(user_key))
            .one(&*self.db)
            .await?;

        Ok(model.map(|m| m.to_stored()))
    }

    async fn replace(&self, user_key: i32, code: &ActivationCode) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        if let Err(e) = store_code(&txn, user_key, code).await {
            warn!(user_key, error = %e, "activation code replace failed, rolling back");
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await?;
        Ok(())
    }

    async fn remove(&self, code_key: i32) -> Result<(), RepositoryError> {
        delete_code(&*self.db, code_key).await
    }
}
