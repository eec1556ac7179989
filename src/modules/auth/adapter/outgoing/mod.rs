pub mod jwt;
pub mod sea_orm_entity;
pub mod security;

mod account_repository_postgres;
mod secure_code_repository_postgres;

pub use account_repository_postgres::AccountRepositoryPostgres;
pub use secure_code_repository_postgres::{delete_code, store_code, SecureCodeRepositoryPostgres};
