pub mod import;
pub mod migrate;

use sea_orm::{Database, DatabaseConnection};
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Connect to the database named by `DATABASE_URL`
pub async fn connect() -> Result<DatabaseConnection, Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;

    info!(
        "Connecting to {:?} database: {}",
        config.backend,
        config.redacted_url()
    );

    match Database::connect(&config.url).await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            Err(Box::new(e))
        }
    }
}
