mod classroom_repository_postgres;
pub mod sea_orm_entity;

pub use classroom_repository_postgres::{
    apply_classroom_changes, insert_classroom, ClassroomRepositoryPostgres,
};
