// Database connection pooling management

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

use crate::config::ApiConfig;
use crate::db::error::DbError;
use crate::db::repositories::Repositories;

/// Database connection pool for managing Sea-ORM connections
pub struct DbPool {
    pool: DatabaseConnection,
}

impl DbPool {
    /// Creates a new database connection pool from API configuration
    pub async fn new(config: &ApiConfig) -> Result<Self, DbError> {
        let connect_timeout_secs: u64 = 10;
        let acquire_timeout_secs: u64 = 8;
        let idle_timeout_secs: u64 = 300;
        let max_lifetime_secs: u64 = 1800;
        let debug_mode = false;

        let mut conn_opts = ConnectOptions::new(config.database_url.clone());
        conn_opts
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .sqlx_logging(debug_mode);

        // An in-memory SQLite database lives and dies with its single connection
        if is_in_memory(&config.database_url) {
            conn_opts.max_connections(1).min_connections(1);
        } else {
            let max_connections = config.db_pool_max.max(1);
            conn_opts
                .max_connections(max_connections)
                .min_connections(config.db_pool_min.min(max_connections))
                .idle_timeout(Duration::from_secs(idle_timeout_secs))
                .max_lifetime(Duration::from_secs(max_lifetime_secs));
        }

        Database::connect(conn_opts)
            .await
            .map(|pool| DbPool { pool })
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }

    /// Applies every pending schema migration
    pub async fn run_migrations(&self) -> Result<(), DbError> {
        let pending = Migrator::get_pending_migrations(&self.pool)
            .await
            .map_err(|e| DbError::MigrationError(e.to_string()))?;
        info!("Applying {} pending migrations", pending.len());

        Migrator::up(&self.pool, None)
            .await
            .map_err(|e| DbError::MigrationError(e.to_string()))
    }

    /// Creates repository instances for database operations
    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.pool.clone())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.starts_with("sqlite") && database_url.contains(":memory:")
}
