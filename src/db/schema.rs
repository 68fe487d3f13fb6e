//! Table creation from entity metadata.

use sea_orm::sea_query::{ForeignKeyCreateStatement, Table, TableCreateStatement};
use sea_orm::{
    ColumnTrait, ColumnType, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, Iterable,
    RelationTrait, Schema,
};
use tracing::{debug, info};

use crate::entities::prelude::*;

/// Widest decimal SQLite's query builder accepts.
const SQLITE_DECIMAL_PRECISION: u32 = 16;

/// Create every table that does not exist yet.
///
/// Tables are created parents first so that foreign keys resolve.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, Countries).await?;
    create_table(db, Cities).await?;
    create_table(db, Addresses).await?;
    create_table(db, Employees).await?;
    create_table(db, Salaries).await?;
    create_table(db, JobCategories).await?;
    info!("Schema ready");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let statement = table_statement(backend, entity);
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// `CREATE TABLE IF NOT EXISTS` for `entity` on `backend`.
///
/// SQLite cannot declare decimals wider than 16 digits, so such columns are
/// narrowed there. Other backends get the entity's declared types.
pub(crate) fn table_statement<E: EntityTrait>(backend: DbBackend, entity: E) -> TableCreateStatement {
    let schema = Schema::new(backend);
    let mut statement = match backend {
        DbBackend::Sqlite if has_wide_decimal::<E>() => narrowed_table(&schema, entity),
        _ => schema.create_table_from_entity(entity),
    };
    statement.if_not_exists();
    statement
}

fn has_wide_decimal<E: EntityTrait>() -> bool {
    E::Column::iter().any(|column| {
        matches!(
            column.def().get_column_type(),
            ColumnType::Decimal(Some((precision, _))) if *precision > SQLITE_DECIMAL_PRECISION
        )
    })
}

/// Rebuild the entity's table with wide decimals clamped, keeping
/// nullability, keys and foreign keys.
fn narrowed_table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut statement = Table::create();
    statement.table(entity.table_ref());

    for column in E::Column::iter() {
        let mut column_def = schema.get_column_def::<E>(column);
        if let ColumnType::Decimal(Some((precision, scale))) = column.def().get_column_type() {
            if *precision > SQLITE_DECIMAL_PRECISION {
                debug!(table = entity.table_name(), precision, "Narrowing decimal column for SQLite");
                column_def.decimal_len(SQLITE_DECIMAL_PRECISION, *scale);
            }
        }
        statement.col(&mut column_def);
    }

    for relation in E::Relation::iter() {
        let relation = relation.def();
        // has_one/has_many sides own the relation; the foreign key lives on belongs_to
        if !relation.is_owner {
            statement.foreign_key(&mut <ForeignKeyCreateStatement as From<_>>::from(relation));
        }
    }

    statement
}
