//! Database module for handling PostgreSQL connections
//!
//! This module provides connection pooling, embedded migrations, and
//! health checks for the PostgreSQL database.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

use crate::error::{DatabaseError, DatabaseResult};

/// Database pool configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

impl DatabaseConfig {
    /// Create a configuration with the default 30s acquire timeout
    pub fn new(database_url: String, max_connections: u32) -> Self {
        Self {
            database_url,
            max_connections,
            acquire_timeout: 30,
        }
    }
}

/// Initialize a PostgreSQL connection pool
///
/// # Arguments
/// * `config` - Database configuration
///
/// # Returns
/// * `DatabaseResult<PgPool>` - PostgreSQL connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<PgPool> {
    info!("Initializing database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .connect(&config.database_url)
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Apply pending embedded migrations
///
/// # Arguments
/// * `pool` - PostgreSQL connection pool
/// * `migrator` - Migrator embedding the calling crate's migration files
pub async fn run_migrations(pool: &PgPool, migrator: &Migrator) -> DatabaseResult<()> {
    migrator.run(pool).await?;

    info!("Database migrations applied");
    Ok(())
}

/// Check database connectivity
///
/// # Arguments
/// * `pool` - PostgreSQL connection pool
///
/// # Returns
/// * `DatabaseResult<bool>` - True if the database is reachable, false otherwise
pub async fn health_check(pool: &PgPool) -> DatabaseResult<bool> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => Ok(true),
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::new("postgresql://postgres@localhost/contacts".into(), 5);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, 30);
    }
}
