use migration::Migrator;
use sea_orm_migration::prelude::*;
use std::error::Error;
use tracing::{error, info};

use crate::commands::connect;

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    // Log migration files to be applied
    let all_migrations = Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());
    for m in &all_migrations {
        info!("Migration file: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    match Migrator::up(&connection, steps).await {
        Ok(_) => {
            info!("Migrations applied");
            Ok(())
        }
        Err(e) => {
            error!("Failed to run migrations: {}", e);
            error!("Migration error details: {:?}", e);
            Err(Box::new(e))
        }
    }
}

/// Roll back the most recent migrations
pub async fn rollback(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;
    let steps = steps.unwrap_or(1);

    info!("Rolling back {} migrations", steps);
    match Migrator::down(&connection, Some(steps)).await {
        Ok(_) => {
            info!("Rolled back {} migrations", steps);
            Ok(())
        }
        Err(e) => {
            error!("Failed to roll back migrations: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Drop every table and apply all migrations from scratch
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Resetting database");
    match Migrator::fresh(&connection).await {
        Ok(_) => {
            info!("Database reset complete");
            Ok(())
        }
        Err(e) => {
            error!("Failed to reset database: {}", e);
            Err(Box::new(e))
        }
    }
}

/// Print applied and pending migrations
pub async fn status() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let applied = Migrator::get_applied_migrations(&connection).await?;
    let pending = Migrator::get_pending_migrations(&connection).await?;

    for m in &applied {
        info!("Applied: {}", m.name());
    }
    for m in &pending {
        info!("Pending: {}", m.name());
    }
    info!("{} applied, {} pending", applied.len(), pending.len());

    Ok(())
}
