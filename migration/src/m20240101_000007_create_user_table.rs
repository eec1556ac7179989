use sea_orm_migration::prelude::*;

use crate::schema::{
    attach_updated_at_trigger, audited, drop_updated_at_trigger, id_col, reference, uuid_col,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let (role_id, mut role_fk) =
            reference("te_user", "role_id", "te_role", ForeignKeyAction::SetNull);
        let (location_id, mut location_fk) =
            reference("te_user", "location_id", "te_location", ForeignKeyAction::SetNull);
        let (status_id, mut status_fk) =
            reference("te_user", "status_id", "te_status", ForeignKeyAction::SetNull);

        manager
            .create_table(
                audited(
                    Table::create()
                        .table(TeUser::Table)
                        .if_not_exists()
                        .col(id_col())
                        .col(uuid_col())
                        .col(ColumnDef::new(TeUser::FirstName).string_len(50).not_null())
                        .col(ColumnDef::new(TeUser::LastName).string_len(50).null())
                        .col(
                            ColumnDef::new(TeUser::Email)
                                .string_len(255)
                                .not_null()
                                .unique_key(),
                        )
                        // Null until the activation code is used
                        .col(ColumnDef::new(TeUser::Password).string_len(255).null())
                        .col(ColumnDef::new(TeUser::PhoneNo).string_len(20).null())
                        .col(
                            ColumnDef::new(TeUser::LastLogin)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(role_id)
                        .col(location_id)
                        .col(status_id)
                        .foreign_key(&mut role_fk)
                        .foreign_key(&mut location_fk)
                        .foreign_key(&mut status_fk),
                )
                .to_owned(),
            )
            .await?;

        // Case-insensitive email lookups at login and on create
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_te_user_email_lower
                ON te_user (LOWER(email));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_te_user_created_at
                ON te_user (created_at DESC);
                "#,
            )
            .await?;

        attach_updated_at_trigger(manager, "te_user").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "te_user").await?;

        manager
            .drop_table(Table::drop().table(TeUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeUser {
    Table,
    FirstName,
    LastName,
    Email,
    Password,
    PhoneNo,
    LastLogin,
}
