//! Helpers shared by the `te_*` table migrations.

use sea_orm_migration::prelude::*;

/// Every table carries `uuid`, audit timestamps and an optional status.
pub fn audited(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(
            ColumnDef::new(Alias::new("created_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Alias::new("updated_at"))
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Alias::new("deleted_at"))
                .timestamp_with_time_zone()
                .null(),
        )
}

/// Width of role, location and accessory names. The API accepts up to 32.
pub const NAME_LEN: u32 = 50;

pub fn name_col<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name).string_len(NAME_LEN).not_null().to_owned()
}

pub fn id_col() -> ColumnDef {
    ColumnDef::new(Alias::new("id"))
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

pub fn uuid_col() -> ColumnDef {
    ColumnDef::new(Alias::new("uuid"))
        .uuid()
        .not_null()
        .unique_key()
        .to_owned()
}

/// Nullable `<name>` integer column pointing at `<target>.id`.
pub fn reference(
    table: &str,
    column: &str,
    target: &str,
    on_delete: ForeignKeyAction,
) -> (ColumnDef, ForeignKeyCreateStatement) {
    let col = ColumnDef::new(Alias::new(column)).integer().null().to_owned();
    let fk = ForeignKey::create()
        .name(format!("fk_{table}_{column}"))
        .from(Alias::new(table), Alias::new(column))
        .to(Alias::new(target), Alias::new("id"))
        .on_delete(on_delete)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned();
    (col, fk)
}

pub async fn attach_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"
            CREATE TRIGGER update_{table}_updated_at
            BEFORE UPDATE ON {table}
            FOR EACH ROW
            EXECUTE FUNCTION update_updated_at_column();
            "#
        ))
        .await?;
    Ok(())
}

pub async fn drop_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table}"
        ))
        .await?;
    Ok(())
}
