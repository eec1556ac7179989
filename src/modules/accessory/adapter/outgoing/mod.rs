mod accessory_repository_postgres;
pub mod sea_orm_entity;

pub use accessory_repository_postgres::AccessoryRepositoryPostgres;
