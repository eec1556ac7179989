mod role_repository_postgres;
pub mod sea_orm_entity;

pub use role_repository_postgres::{role_key, RoleRepositoryPostgres};
