use sea_orm::{
    sea_query::Value, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, Select,
};

use crate::shared::record_ref::RecordRef;
use crate::shared::repository::{Referenced, RepositoryError};

/// Tables carrying the common audit columns: an internal key, a public
/// uuid, `updated_at` and the soft-delete marker `deleted_at`.
pub trait Tracked: EntityTrait {
    const REFERENCED: Referenced;

    fn key_column() -> Self::Column;
    fn uuid_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

/// Tables whose rows move through the seeded statuses.
pub trait HasStatus: Tracked {
    fn status_column() -> Self::Column;
}

/// Rows that have not been soft deleted.
pub fn live<E: Tracked>() -> Select<E> {
    E::find().filter(E::deleted_at_column().is_null())
}

/// A live row addressed by either identifier shape.
pub fn live_by_ref<E: Tracked>(reference: &RecordRef) -> Select<E> {
    match *reference {
        RecordRef::Key(key) => live::<E>().filter(E::key_column().eq(key)),
        RecordRef::Public(id) => live::<E>().filter(E::uuid_column().eq(id)),
    }
}

/// Turns a foreign reference from a request into the row key to store.
/// A reference to a missing or soft-deleted row is reported as
/// `UnknownReference` so the caller can name the referenced entity.
pub async fn resolve_key<E, C>(db: &C, reference: &RecordRef) -> Result<i32, RepositoryError>
where
    E: Tracked,
    C: ConnectionTrait,
{
    let model = live_by_ref::<E>(reference)
        .one(db)
        .await?
        .ok_or(RepositoryError::UnknownReference(E::REFERENCED))?;

    match model.get(E::key_column()) {
        Value::Int(Some(key)) => Ok(key),
        other => Err(RepositoryError::DatabaseError(format!(
            "unexpected key value {other:?}"
        ))),
    }
}

/// Same as [`resolve_key`] for optional references.
pub async fn resolve_optional_key<E, C>(
    db: &C,
    reference: Option<&RecordRef>,
) -> Result<Option<i32>, RepositoryError>
where
    E: Tracked,
    C: ConnectionTrait,
{
    match reference {
        Some(reference) => resolve_key::<E, C>(db, reference).await.map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::status::adapter::outgoing::sea_orm_entity::{
        Entity as StatusEntity, Model as StatusModel,
    };
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};
    use uuid::Uuid;

    fn status_model(id: i32) -> StatusModel {
        let now = Utc::now().fixed_offset();
        StatusModel {
            id,
            uuid: Uuid::new_v4(),
            name: "Active".to_string(),
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_live_by_ref_filters_on_identifier_shape() {
        let by_key = live_by_ref::<StatusEntity>(&RecordRef::Key(7))
            .build(DatabaseBackend::Postgres)
            .to_string();
        assert!(by_key.contains(r#""te_status"."id" = 7"#));
        assert!(by_key.contains(r#""te_status"."deleted_at" IS NULL"#));

        let id = Uuid::new_v4();
        let by_uuid = live_by_ref::<StatusEntity>(&RecordRef::Public(id))
            .build(DatabaseBackend::Postgres)
            .to_string();
        assert!(by_uuid.contains(r#""te_status"."uuid" = "#));
        assert!(by_uuid.contains(&id.to_string()));
    }

    #[tokio::test]
    async fn test_resolve_key_returns_row_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![status_model(2)]])
            .into_connection();

        let key = resolve_key::<StatusEntity, _>(&db, &RecordRef::Public(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(key, 2);
    }

    #[tokio::test]
    async fn test_resolve_key_missing_row_names_referenced_entity() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<StatusModel>::new()])
            .into_connection();

        let result = resolve_key::<StatusEntity, _>(&db, &RecordRef::Key(99)).await;

        assert_eq!(
            result,
            Err(RepositoryError::UnknownReference(Referenced::Status))
        );
    }

    #[tokio::test]
    async fn test_resolve_optional_key_skips_query_when_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = resolve_optional_key::<StatusEntity, _>(&db, None).await;

        assert_eq!(result, Ok(None));
        assert!(db.into_transaction_log().is_empty());
    }
}
