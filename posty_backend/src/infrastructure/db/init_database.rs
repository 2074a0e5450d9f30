use crate::error::Result;
use crate::infrastructure::db::migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

/// Connects and brings the schema up to date.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);
    // every pooled connection would otherwise open its own empty in-memory database
    if database_url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opt).await?;

    match db.get_database_backend() {
        DbBackend::Sqlite => info!("SQLite database detected."),
        DbBackend::Postgres => info!("Postgres database detected."),
        DbBackend::MySql => warn!("MySql database detected, only SQLite is tested."),
    }

    Migrator::up(&db, None).await?;

    Ok(db)
}
