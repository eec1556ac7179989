use sea_orm::entity::prelude::*;

use crate::modules::auth::application::domain::entities::StoredCode;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "te_secure_code")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub user_id: i32,

    #[sea_orm(unique)]
    pub activation_code: String,

    pub expires_at: DateTimeWithTimeZone,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_stored(&self) -> StoredCode {
        StoredCode {
            key: self.id,
            user_key: self.user_id,
            code: self.activation_code.clone(),
            expires_at: self.expires_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    User,
}

impl Related<crate::modules::user::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
