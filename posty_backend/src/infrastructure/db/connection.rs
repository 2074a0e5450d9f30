use crate::{config::BackendConfig, error::Result, infrastructure::db::init_database::init_database};
use sea_orm::DatabaseConnection;

pub async fn get_connection(config: &BackendConfig) -> Result<DatabaseConnection> {
    let db = init_database(&config.database_url).await?;
    Ok(db)
}
