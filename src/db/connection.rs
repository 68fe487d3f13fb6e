//! Database connection pool and utility functions.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, Statement,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;

/// Create a new database connection with configured pool settings.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.connection_string());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt).await
}

/// Test database connection by executing a simple query.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared("SELECT 1").await?;
    Ok(())
}

/// Get the database server version string.
pub async fn get_version(db: &DatabaseConnection) -> Result<String, DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Sqlite => "SELECT 'SQLite ' || sqlite_version() AS version",
        _ => "SELECT version() AS version",
    };

    let result = db.query_one(Statement::from_string(backend, sql.to_owned())).await?;

    match result {
        Some(row) => {
            let version: String = row.try_get("", "version")?;
            Ok(version)
        }
        None => Ok("Unknown".to_owned()),
    }
}

/// Get record counts for all tables.
pub async fn get_table_counts(db: &DatabaseConnection) -> Result<TableCounts, DbErr> {
    use crate::entities::prelude::*;

    Ok(TableCounts {
        employees: Employees::find().count(db).await?,
        addresses: Addresses::find().count(db).await?,
        cities: Cities::find().count(db).await?,
        countries: Countries::find().count(db).await?,
        salaries: Salaries::find().count(db).await?,
        job_categories: JobCategories::find().count(db).await?,
    })
}

/// Table record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub employees: u64,
    pub addresses: u64,
    pub cities: u64,
    pub countries: u64,
    pub salaries: u64,
    pub job_categories: u64,
}
