use std::str::FromStr;

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ConnectionTrait, EntityTrait, IdenStatic, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::shared::query::list_query::{ListRequest, RecordList};
use crate::shared::repository::RepositoryError;

/// Entities the list builder can filter by a free-text `search` value.
pub trait Searchable: EntityTrait {
    fn search_column() -> Self::Column;

    /// Columns a client may name in `sortBy`.
    fn sortable_columns() -> Vec<Self::Column>;
}

/// Runs `base` as either a full fetch or a sorted, filtered page.
///
/// `base` carries the caller's own filters (soft-delete exclusion, scoping).
/// A page request additionally gets an `ILIKE %search%` on the entity's
/// search column, `ORDER BY sortBy`, then `OFFSET (pageNo * limit) - limit`
/// and `LIMIT limit`. The total is counted before paging is applied.
pub async fn fetch_records<E, C>(
    db: &C,
    base: Select<E>,
    request: &ListRequest,
) -> Result<RecordList<E::Model>, RepositoryError>
where
    E: Searchable,
    E::Model: Sync,
    <E as EntityTrait>::Column: FromStr,
    C: ConnectionTrait,
{
    let page = match request {
        ListRequest::All => {
            let rows = base.all(db).await?;
            return Ok(RecordList::All(rows));
        }
        ListRequest::Page(page) => page,
    };

    let sort_column = <E as EntityTrait>::Column::from_str(&page.sort_by)
        .ok()
        .filter(|column| {
            E::sortable_columns()
                .iter()
                .any(|allowed| allowed.as_str() == column.as_str())
        })
        .ok_or_else(|| RepositoryError::InvalidQuery(page.sort_by.clone()))?;

    let mut query = base;
    if let Some(ref search) = page.search {
        let pattern = format!("%{}%", search);
        query = query.filter(Expr::col(E::search_column()).ilike(&pattern));
    }

    let count = query.clone().count(db).await?;

    let rows = query
        .order_by(sort_column, page.sort_order.into())
        .offset(page.offset())
        .limit(page.page_limit)
        .all(db)
        .await?;

    Ok(RecordList::Page { count, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::status::adapter::outgoing::sea_orm_entity::{self as status, Column};
    use crate::shared::query::list_query::{PageRequest, SortOrder};
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{ColumnTrait, DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn status_model(id: i32, name: &str) -> status::Model {
        let now = Utc::now().fixed_offset();
        status::Model {
            id,
            uuid: Uuid::new_v4(),
            name: name.to_string(),
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    fn base() -> Select<status::Entity> {
        status::Entity::find().filter(Column::DeletedAt.is_null())
    }

    #[tokio::test]
    async fn test_fetch_all_runs_single_unsorted_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                status_model(1, "Inactive"),
                status_model(2, "Active"),
            ]])
            .into_connection();

        let result = fetch_records(&db, base(), &ListRequest::All).await.unwrap();

        assert_eq!(result.rows().len(), 2);
        assert!(matches!(result, RecordList::All(_)));

        let log = format!("{:?}", db.into_transaction_log());
        assert!(!log.contains("ORDER BY"));
        assert!(!log.contains("LIMIT"));
        assert!(log.contains("IS NULL"));
    }

    #[tokio::test]
    async fn test_fetch_page_counts_then_slices() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(12)]])
            .append_query_results(vec![vec![status_model(6, "Archived")]])
            .into_connection();

        let request = ListRequest::Page(PageRequest {
            page_no: 3,
            page_limit: 5,
            sort_by: "name".to_string(),
            sort_order: SortOrder::Asc,
            search: Some("arch".to_string()),
        });

        let result = fetch_records(&db, base(), &request).await.unwrap();

        match result {
            RecordList::Page { count, rows } => {
                assert_eq!(count, 12);
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].name, "Archived");
            }
            other => panic!("expected page, got {:?}", other),
        }

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("ILIKE"));
        assert!(log.contains("%arch%"));
        assert!(log.contains("ORDER BY"));
        assert!(log.contains("ASC"));
        // offset = (3 * 5) - 5
        assert!(log.contains("BigUnsigned(Some(10))"));
    }

    #[tokio::test]
    async fn test_default_sort_field_resolves() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![Vec::<status::Model>::new()])
            .into_connection();

        let result = fetch_records(&db, base(), &ListRequest::Page(PageRequest::default()))
            .await
            .unwrap();

        assert_eq!(
            result,
            RecordList::Page {
                count: 0,
                rows: vec![]
            }
        );

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("created_at"));
        assert!(log.contains("DESC"));
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_rejected_before_querying() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let request = ListRequest::Page(PageRequest {
            sort_by: "password; DROP TABLE".to_string(),
            ..PageRequest::default()
        });

        let result = fetch_records(&db, base(), &request).await;

        assert!(matches!(result, Err(RepositoryError::InvalidQuery(_))));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_existing_but_unlisted_column_is_rejected() {
        use crate::modules::user::adapter::outgoing::sea_orm_entity as user;

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let request = ListRequest::Page(PageRequest {
            sort_by: "password".to_string(),
            ..PageRequest::default()
        });

        let result = fetch_records(&db, user::Entity::find(), &request).await;

        assert!(matches!(result, Err(RepositoryError::InvalidQuery(ref f)) if f == "password"));
        assert!(db.into_transaction_log().is_empty());

        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let request = ListRequest::Page(PageRequest {
            sort_by: "is_active".to_string(),
            ..PageRequest::default()
        });

        let result = fetch_records(&db, base(), &request).await;
        assert!(matches!(result, Err(RepositoryError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_database_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Custom("boom".into())])
            .into_connection();

        let result = fetch_records(&db, base(), &ListRequest::All).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
    }
}
