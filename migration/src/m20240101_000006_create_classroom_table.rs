use sea_orm_migration::prelude::*;

use crate::schema::{
    attach_updated_at_trigger, audited, drop_updated_at_trigger, id_col, reference, uuid_col,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let (corporate_id, mut corporate_fk) = reference(
            "te_classroom",
            "corporate_id",
            "te_corporate",
            ForeignKeyAction::SetNull,
        );
        let (accessory_id, mut accessory_fk) = reference(
            "te_classroom",
            "accessory_id",
            "te_accessory",
            ForeignKeyAction::SetNull,
        );
        let (status_id, mut status_fk) =
            reference("te_classroom", "status_id", "te_status", ForeignKeyAction::SetNull);

        manager
            .create_table(
                audited(
                    Table::create()
                        .table(TeClassroom::Table)
                        .if_not_exists()
                        .col(id_col())
                        .col(uuid_col())
                        .col(ColumnDef::new(TeClassroom::Name).string_len(100).not_null())
                        .col(ColumnDef::new(TeClassroom::Capacity).integer().null())
                        .col(corporate_id)
                        .col(accessory_id)
                        .col(status_id)
                        .foreign_key(&mut corporate_fk)
                        .foreign_key(&mut accessory_fk)
                        .foreign_key(&mut status_fk),
                )
                .to_owned(),
            )
            .await?;

        // Nested classrooms are loaded per corporate
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_te_classroom_corporate_id
                ON te_classroom (corporate_id);
                "#,
            )
            .await?;

        attach_updated_at_trigger(manager, "te_classroom").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "te_classroom").await?;

        manager
            .drop_table(Table::drop().table(TeClassroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeClassroom {
    Table,
    Name,
    Capacity,
}
