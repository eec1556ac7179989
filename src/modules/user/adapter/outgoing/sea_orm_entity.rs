use sea_orm::entity::prelude::*;

use crate::modules::location::adapter::outgoing::sea_orm_entity as location;
use crate::modules::role::adapter::outgoing::sea_orm_entity as role;
use crate::modules::status::adapter::outgoing::sea_orm_entity as status;
use crate::modules::user::application::domain::entities::UserView;
use crate::shared::query::{HasStatus, Searchable, Tracked};
use crate::shared::Referenced;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "te_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub uuid: Uuid,

    pub first_name: String,

    pub last_name: Option<String>,

    #[sea_orm(unique)]
    pub email: String,

    /// bcrypt hash; empty until the account password is set up
    pub password: Option<String>,

    pub phone_no: Option<String>,

    pub last_login: Option<DateTimeWithTimeZone>,

    pub role_id: Option<i32>,

    pub location_id: Option<i32>,

    pub status_id: Option<i32>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

/// Rows joined onto a user when it is projected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Associations<'a> {
    pub role: Option<&'a role::Model>,
    pub location: Option<&'a location::Model>,
    pub status: Option<&'a status::Model>,
}

impl Model {
    pub fn to_view(&self, joined: Associations<'_>) -> UserView {
        UserView {
            key: self.id,
            id: self.uuid,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_no: self.phone_no.clone(),
            last_login: self.last_login.map(Into::into),
            role: joined.role.map(role::Model::to_reference),
            location: joined.location.map(location::Model::to_reference),
            status: joined.status.map(status::Model::to_reference),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::role::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::RoleId",
        to = "crate::modules::role::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Role,
    #[sea_orm(
        belongs_to = "crate::modules::location::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::LocationId",
        to = "crate::modules::location::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Location,
    #[sea_orm(
        belongs_to = "crate::modules::status::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::StatusId",
        to = "crate::modules::status::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Status,
}

impl Related<role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Searchable for Entity {
    fn search_column() -> Column {
        Column::Email
    }

    fn sortable_columns() -> Vec<Column> {
        vec![
            Column::Id,
            Column::FirstName,
            Column::LastName,
            Column::Email,
            Column::PhoneNo,
            Column::LastLogin,
            Column::CreatedAt,
            Column::UpdatedAt,
        ]
    }
}

impl Tracked for Entity {
    const REFERENCED: Referenced = Referenced::User;

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
