use sea_orm::entity::prelude::*;

use crate::modules::location::application::domain::entities::LocationView;
use crate::modules::status::adapter::outgoing::sea_orm_entity as status;
use crate::shared::query::{HasStatus, Searchable, Tracked};
use crate::shared::{Reference, Referenced};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "te_location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    pub name: String,

    pub state: Option<String>,

    pub status_id: Option<i32>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_view(&self, status: Option<&status::Model>) -> LocationView {
        LocationView {
            key: self.id,
            id: self.uuid,
            name: self.name.clone(),
            state: self.state.clone(),
            status: status.map(status::Model::to_reference),
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
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::status::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::StatusId",
        to = "crate::modules::status::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Status,
}

impl Related<status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
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
            Column::State,
            Column::CreatedAt,
            Column::UpdatedAt,
        ]
    }
}

impl Tracked for Entity {
    const REFERENCED: Referenced = Referenced::Location;

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
