use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, LoaderTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::classroom::adapter::outgoing::{
    apply_classroom_changes, insert_classroom, sea_orm_entity as classroom,
};
use crate::modules::corporate::application::domain::entities::CorporateView;
use crate::modules::corporate::application::ports::outgoing::{
    CorporateChanges, CorporateRepository, NewCorporate,
};
use crate::modules::location::adapter::outgoing::sea_orm_entity as location;
use crate::modules::status::adapter::outgoing::{mark_deleted, sea_orm_entity as status};
use crate::shared::query::{
    fetch_records, live, live_by_ref, resolve_optional_key, ListRequest, RecordList,
};
use crate::shared::{RecordRef, Referenced, RepositoryError};

use super::sea_orm_entity::{
    ActiveModel as CorporateActiveModel, Column, Entity as CorporateEntity,
    Model as CorporateModel,
};

#[derive(Debug, Clone)]
pub struct CorporateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CorporateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_views(
        &self,
        models: Vec<CorporateModel>,
    ) -> Result<Vec<CorporateView>, RepositoryError> {
        let locations = models.load_one(location::Entity, &*self.db).await?;
        let statuses = models.load_one(status::Entity, &*self.db).await?;
        let classrooms = models
            .load_many(live::<classroom::Entity>(), &*self.db)
            .await?;

        Ok(models
            .iter()
            .enumerate()
            .map(|(i, corporate)| {
                corporate.to_view(
                    locations.get(i).and_then(Option::as_ref),
                    statuses.get(i).and_then(Option::as_ref),
                    classrooms.get(i).map(Vec::as_slice).unwrap_or_default(),
                )
            })
            .collect())
    }

    async fn to_view(&self, model: CorporateModel) -> Result<CorporateView, RepositoryError> {
        self.to_views(vec![model])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert_with_classrooms(
        txn: &DatabaseTransaction,
        data: NewCorporate,
    ) -> Result<CorporateModel, RepositoryError> {
        let location_id =
            resolve_optional_key::<location::Entity, _>(txn, data.details.location.as_ref())
                .await?;
        let status_id =
            resolve_optional_key::<status::Entity, _>(txn, data.details.status.as_ref()).await?;

        let details = data.details;
        let corporate = CorporateActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            contact_no: Set(details.contact_no),
            street: Set(details.street),
            landmark: Set(details.landmark),
            city: Set(details.city),
            pincode: Set(details.pincode),
            capacity: Set(details.capacity),
            location_id: Set(location_id),
            status_id: Set(status_id),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for new_classroom in data.classrooms {
            insert_classroom(txn, new_classroom, Some(corporate.id)).await?;
        }

        Ok(corporate)
    }

    /// Classroom edits, then classroom inserts, then the corporate row.
    async fn apply_changes(
        txn: &DatabaseTransaction,
        key: i32,
        changes: CorporateChanges,
    ) -> Result<CorporateModel, RepositoryError> {
        let model = live_by_ref::<CorporateEntity>(&RecordRef::Key(key))
            .one(txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        for (target, edit) in changes.edited_classrooms {
            let owned = live_by_ref::<classroom::Entity>(&target)
                .filter(classroom::Column::CorporateId.eq(model.id))
                .one(txn)
                .await?
                .ok_or(RepositoryError::UnknownReference(Referenced::Classroom))?;

            apply_classroom_changes(txn, owned, edit, None).await?;
        }

        for new_classroom in changes.new_classrooms {
            insert_classroom(txn, new_classroom, Some(model.id)).await?;
        }

        let details = changes.details;
        let location_id =
            resolve_optional_key::<location::Entity, _>(txn, details.location.as_ref()).await?;
        let status_id =
            resolve_optional_key::<status::Entity, _>(txn, details.status.as_ref()).await?;

        let mut active: CorporateActiveModel = model.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(contact_no) = details.contact_no {
            active.contact_no = Set(Some(contact_no));
        }
        if let Some(street) = details.street {
            active.street = Set(Some(street));
        }
        if let Some(landmark) = details.landmark {
            active.landmark = Set(Some(landmark));
        }
        if let Some(city) = details.city {
            active.city = Set(Some(city));
        }
        if let Some(pincode) = details.pincode {
            active.pincode = Set(Some(pincode));
        }
        if let Some(capacity) = details.capacity {
            active.capacity = Set(Some(capacity));
        }
        if let Some(location_id) = location_id {
            active.location_id = Set(Some(location_id));
        }
        if let Some(status_id) = status_id {
            active.status_id = Set(Some(status_id));
        }

        Ok(active.update(txn).await?)
    }
}

#[async_trait]
impl CorporateRepository for CorporateRepositoryPostgres {
    async fn create(&self, data: NewCorporate) -> Result<CorporateView, RepositoryError> {
        let txn = self.db.begin().await?;

        let inserted = match Self::insert_with_classrooms(&txn, data).await {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, "corporate create rolled back");
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await?;

        self.to_view(inserted).await
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let matches = live::<CorporateEntity>()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Email))).eq(email.to_lowercase()))
            .count(&*self.db)
            .await?;

        Ok(matches > 0)
    }

    async fn search(&self, pattern: &str) -> Result<Vec<CorporateView>, RepositoryError> {
        let models = live::<CorporateEntity>()
            .filter(Expr::col(Column::Name).ilike(format!("%{pattern}%")))
            .all(&*self.db)
            .await?;

        self.to_views(models).await
    }

    async fn find(&self, corporate: &RecordRef) -> Result<Option<CorporateView>, RepositoryError> {
        match live_by_ref::<CorporateEntity>(corporate).one(&*self.db).await? {
            Some(model) => self.to_view(model).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        request: &ListRequest,
    ) -> Result<RecordList<CorporateView>, RepositoryError> {
        let records = fetch_records(&*self.db, live::<CorporateEntity>(), request).await?;

        let (models, count) = records.into_parts();
        let views = self.to_views(models).await?;

        Ok(RecordList::from_parts(views, count))
    }

    async fn update(
        &self,
        key: i32,
        changes: CorporateChanges,
    ) -> Result<CorporateView, RepositoryError> {
        let txn = self.db.begin().await?;

        let updated = match Self::apply_changes(&txn, key, changes).await {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, corporate_key = key, "corporate update rolled back");
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await?;

        self.to_view(updated).await
    }

    async fn soft_delete(&self, key: i32) -> Result<(), RepositoryError> {
        mark_deleted::<CorporateEntity, _>(&*self.db, key).await
    }
}
