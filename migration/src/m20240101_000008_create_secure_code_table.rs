use sea_orm_migration::prelude::*;

use crate::schema::{attach_updated_at_trigger, drop_updated_at_trigger, id_col};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeSecureCode::Table)
                    .if_not_exists()
                    .col(id_col())
                    // One live code per user
                    .col(
                        ColumnDef::new(TeSecureCode::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeSecureCode::ActivationCode)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeSecureCode::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeSecureCode::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TeSecureCode::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_te_secure_code_user_id")
                            .from(TeSecureCode::Table, TeSecureCode::UserId)
                            .to(TeUser::Table, TeUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        attach_updated_at_trigger(manager, "te_secure_code").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "te_secure_code").await?;

        manager
            .drop_table(Table::drop().table(TeSecureCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TeSecureCode {
    Table,
    UserId,
    ActivationCode,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeUser {
    Table,
    Id,
}
