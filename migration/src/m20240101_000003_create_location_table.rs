use sea_orm_migration::prelude::*;

use crate::schema::{
    attach_updated_at_trigger, audited, drop_updated_at_trigger, id_col, name_col, reference,
    uuid_col,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let (status_id, mut status_fk) =
            reference("te_location", "status_id", "te_status", ForeignKeyAction::SetNull);

        manager
            .create_table(
                audited(
                    Table::create()
                        .table(TeLocation::Table)
                        .if_not_exists()
                        .col(id_col())
                        .col(uuid_col())
                        .col(name_col(TeLocation::Name))
                        .col(ColumnDef::new(TeLocation::State).string_len(50).null())
                        .col(status_id)
                        .foreign_key(&mut status_fk),
                )
                .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_te_location_name_live
                ON te_location (LOWER(name))
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        attach_updated_at_trigger(manager, "te_location").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "te_location").await?;

        manager
            .drop_table(Table::drop().table(TeLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeLocation {
    Table,
    Name,
    State,
}
