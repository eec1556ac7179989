pub mod sea_orm_entity;
mod status_repository_postgres;

pub use status_repository_postgres::{mark_deleted, status_key, StatusRepositoryPostgres};
