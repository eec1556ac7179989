use sea_orm::entity::prelude::*;

use crate::modules::status::application::domain::entities::StatusView;
use crate::shared::query::{Searchable, Tracked};
use crate::shared::{Reference, Referenced};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "te_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    pub name: String,

    pub is_active: bool,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_view(&self) -> StatusView {
        StatusView {
            key: self.id,
            id: self.uuid,
            name: self.name.clone(),
            is_active: self.is_active,
            is_deleted: self.is_deleted,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    pub fn to_reference(&self) -> Reference {
        Reference {
            id: self.uuid,
            name: self.name.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Searchable for Entity {
    fn search_column() -> Column {
        Column::Name
    }

    fn sortable_columns() -> Vec<Column> {
        vec![Column::Id, Column::Name, Column::CreatedAt, Column::UpdatedAt]
    }
}

impl Tracked for Entity {
    const REFERENCED: Referenced = Referenced::Status;

    fn key_column() -> Column {
        Column::Id
    }

    fn uuid_column() -> Column {
        Column::Uuid
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
        }
        Ok(self)
    }
}
