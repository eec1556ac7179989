mod location_repository_postgres;
pub mod sea_orm_entity;

pub use location_repository_postgres::LocationRepositoryPostgres;
