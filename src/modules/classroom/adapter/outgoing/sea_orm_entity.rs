use sea_orm::entity::prelude::*;

use crate::modules::accessory::adapter::outgoing::sea_orm_entity as accessory;
use crate::modules::classroom::application::domain::entities::ClassroomView;
use crate::modules::corporate::adapter::outgoing::sea_orm_entity as corporate;
use crate::modules::status::adapter::outgoing::sea_orm_entity as status;
use crate::shared::query::{HasStatus, Searchable, Tracked};
use crate::shared::Referenced;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "te_classroom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    pub name: String,

    pub capacity: Option<i32>,

    pub corporate_id: Option<i32>,

    pub accessory_id: Option<i32>,

    pub status_id: Option<i32>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

/// Rows eagerly loaded next to a classroom.
#[derive(Debug, Default, Clone, Copy)]
pub struct Associations<'a> {
    pub corporate: Option<&'a corporate::Model>,
    pub accessory: Option<&'a accessory::Model>,
    pub status: Option<&'a status::Model>,
}

impl Model {
    pub fn to_view(&self, linked: Associations<'_>) -> ClassroomView {
        ClassroomView {
            key: self.id,
            id: self.uuid,
            name: self.name.clone(),
            capacity: self.capacity,
            corporate: linked.corporate.map(corporate::Model::to_reference),
            accessory: linked.accessory.map(accessory::Model::to_reference),
            status: linked.status.map(status::Model::to_reference),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::status::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::StatusId",
        to = "crate::modules::status::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Status,
    #[sea_orm(
        belongs_to = "crate::modules::accessory::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::AccessoryId",
        to = "crate::modules::accessory::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Accessory,
    #[sea_orm(
        belongs_to = "crate::modules::corporate::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CorporateId",
        to = "crate::modules::corporate::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Corporate,
}

impl Related<status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<accessory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accessory.def()
    }
}

impl Related<corporate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Corporate.def()
    }
}

impl Searchable for Entity {
    fn search_column() -> Column {
        Column::Name
    }

    fn sortable_columns() -> Vec<Column> {
        vec![
            Column::Id,
            Column::Name,
            Column::Capacity,
            Column::CreatedAt,
            Column::UpdatedAt,
        ]
    }
}

impl Tracked for Entity {
    const REFERENCED: Referenced = Referenced::Classroom;

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

impl HasStatus for Entity {
    fn status_column() -> Column {
        Column::StatusId
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
