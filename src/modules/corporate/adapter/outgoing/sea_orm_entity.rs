use sea_orm::entity::prelude::*;

use crate::modules::classroom::adapter::outgoing::sea_orm_entity as classroom;
use crate::modules::corporate::application::domain::entities::{
    CorporateClassroom, CorporateView,
};
use crate::modules::location::adapter::outgoing::sea_orm_entity as location;
use crate::modules::status::adapter::outgoing::sea_orm_entity as status;
use crate::shared::query::{HasStatus, Searchable, Tracked};
use crate::shared::{Reference, Referenced};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "te_corporate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub contact_no: Option<String>,

    pub street: Option<String>,

    pub landmark: Option<String>,

    pub city: Option<String>,

    pub pincode: Option<i32>,

    pub capacity: Option<i32>,

    pub location_id: Option<i32>,

    pub status_id: Option<i32>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_view(
        &self,
        location: Option<&location::Model>,
        status: Option<&status::Model>,
        classrooms: &[classroom::Model],
    ) -> CorporateView {
        CorporateView {
            key: self.id,
            id: self.uuid,
            name: self.name.clone(),
            email: self.email.clone(),
            contact_no: self.contact_no.clone(),
            street: self.street.clone(),
            landmark: self.landmark.clone(),
            city: self.city.clone(),
            pincode: self.pincode,
            capacity: self.capacity,
            location: location.map(location::Model::to_reference),
            status: status.map(status::Model::to_reference),
            classrooms: classrooms
                .iter()
                .map(|c| CorporateClassroom {
                    id: c.uuid,
                    name: c.name.clone(),
                    capacity: c.capacity,
                })
                .collect(),
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
    #[sea_orm(
        belongs_to = "crate::modules::location::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::LocationId",
        to = "crate::modules::location::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "crate::modules::classroom::adapter::outgoing::sea_orm_entity::Entity")]
    Classroom,
}

impl Related<status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
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
            Column::Email,
            Column::ContactNo,
            Column::City,
            Column::Pincode,
            Column::Capacity,
            Column::CreatedAt,
            Column::UpdatedAt,
        ]
    }
}

impl Tracked for Entity {
    const REFERENCED: Referenced = Referenced::Corporate;

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
