use sea_orm_migration::prelude::*;

use crate::schema::{attach_updated_at_trigger, audited, drop_updated_at_trigger, id_col, uuid_col};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shared by every te_* table
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .create_table(
                audited(
                    Table::create()
                        .table(TeStatus::Table)
                        .if_not_exists()
                        .col(id_col())
                        .col(uuid_col())
                        .col(ColumnDef::new(TeStatus::Name).string_len(50).not_null())
                        .col(
                            ColumnDef::new(TeStatus::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(TeStatus::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        ),
                )
                .to_owned(),
            )
            .await?;

        // Lookups by name ("Inactive", "Deleted", ...)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_te_status_name
                ON te_status (LOWER(name));
                "#,
            )
            .await?;

        attach_updated_at_trigger(manager, "te_status").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "te_status").await?;

        manager
            .drop_table(Table::drop().table(TeStatus::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeStatus {
    Table,
    Name,
    IsActive,
    IsDeleted,
}
