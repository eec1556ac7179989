pub use sea_orm_migration::prelude::*;

mod schema;

mod m20240101_000001_create_status_table;
mod m20240101_000002_create_role_table;
mod m20240101_000003_create_location_table;
mod m20240101_000004_create_accessory_table;
mod m20240101_000005_create_corporate_table;
mod m20240101_000006_create_classroom_table;
mod m20240101_000007_create_user_table;
mod m20240101_000008_create_secure_code_table;
mod m20240101_000009_seed_statuses_and_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_status_table::Migration),
            Box::new(m20240101_000002_create_role_table::Migration),
            Box::new(m20240101_000003_create_location_table::Migration),
            Box::new(m20240101_000004_create_accessory_table::Migration),
            Box::new(m20240101_000005_create_corporate_table::Migration),
            Box::new(m20240101_000006_create_classroom_table::Migration),
            Box::new(m20240101_000007_create_user_table::Migration),
            Box::new(m20240101_000008_create_secure_code_table::Migration),
            Box::new(m20240101_000009_seed_statuses_and_roles::Migration),
        ]
    }
}
