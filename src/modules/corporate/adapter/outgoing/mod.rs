mod corporate_repository_postgres;
pub mod sea_orm_entity;

pub use corporate_repository_postgres::CorporateRepositoryPostgres;
