// Health check service implementation

use sea_orm::DatabaseConnection;
use tracing::warn;

pub struct HealthChecker {
    conn: DatabaseConnection,
}

impl HealthChecker {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// True when the database answers a ping
    pub async fn check(&self) -> bool {
        match self.conn.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database ping failed: {}", e);
                false
            }
        }
    }
}
