use sea_orm_migration::prelude::*;

use crate::schema::{
    attach_updated_at_trigger, audited, drop_updated_at_trigger, id_col, reference, uuid_col,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let (location_id, mut location_fk) = reference(
            "te_corporate",
            "location_id",
            "te_location",
            ForeignKeyAction::SetNull,
        );
        let (status_id, mut status_fk) =
            reference("te_corporate", "status_id", "te_status", ForeignKeyAction::SetNull);

        manager
            .create_table(
                audited(
                    Table::create()
                        .table(TeCorporate::Table)
                        .if_not_exists()
                        .col(id_col())
                        .col(uuid_col())
                        .col(ColumnDef::new(TeCorporate::Name).string_len(100).not_null())
                        .col(
                            ColumnDef::new(TeCorporate::Email)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(TeCorporate::ContactNo).string_len(20).null())
                        .col(ColumnDef::new(TeCorporate::Street).string_len(255).null())
                        .col(ColumnDef::new(TeCorporate::Landmark).string_len(255).null())
                        .col(ColumnDef::new(TeCorporate::City).string_len(100).null())
                        .col(ColumnDef::new(TeCorporate::Pincode).integer().null())
                        .col(ColumnDef::new(TeCorporate::Capacity).integer().null())
                        .col(location_id)
                        .col(status_id)
                        .foreign_key(&mut location_fk)
                        .foreign_key(&mut status_fk),
                )
                .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_te_corporate_name
                ON te_corporate (LOWER(name));
                "#,
            )
            .await?;

        attach_updated_at_trigger(manager, "te_corporate").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "te_corporate").await?;

        manager
            .drop_table(Table::drop().table(TeCorporate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeCorporate {
    Table,
    Name,
    Email,
    ContactNo,
    Street,
    Landmark,
    City,
    Pincode,
    Capacity,
}
