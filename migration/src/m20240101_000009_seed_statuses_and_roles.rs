use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const STATUSES: [&str; 3] = ["Inactive", "Active", "Deleted"];
const ROLES: [&str; 4] = ["Super Admin", "Admin", "Volunteer", "Student"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for name in STATUSES {
            let is_deleted = name == "Deleted";
            db.execute_unprepared(&format!(
                r#"
                INSERT INTO te_status (uuid, name, is_active, is_deleted)
                VALUES (gen_random_uuid(), '{name}', {is_active}, {is_deleted})
                ON CONFLICT DO NOTHING;
                "#,
                is_active = !is_deleted,
            ))
            .await?;
        }

        // Seeded roles start out Active
        for name in ROLES {
            db.execute_unprepared(&format!(
                r#"
                INSERT INTO te_role (uuid, name, status_id)
                SELECT gen_random_uuid(), '{name}', id FROM te_status WHERE name = 'Active'
                ON CONFLICT DO NOTHING;
                "#
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "DELETE FROM te_role WHERE name IN ('Super Admin', 'Admin', 'Volunteer', 'Student')",
        )
        .await?;
        db.execute_unprepared("DELETE FROM te_status WHERE name IN ('Inactive', 'Active', 'Deleted')")
            .await?;

        Ok(())
    }
}
