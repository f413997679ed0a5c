//! # Storage and Persistence
//!
//! Database connectivity and the restaurant repository. The service layer
//! only sees the `RestaurantRepository` trait; SQLite via SQLx is the
//! production implementation.

pub mod pool;
pub mod repositories;
pub mod schema;

pub use crate::config::DatabaseConfig;

pub use pool::{create_pool, sanitize_url, DbPool};
pub use repositories::{RestaurantRepository, SqlxRestaurantRepository};
pub use schema::ensure_schema;

use crate::errors::{Error, Result};

/// Check database connectivity
pub async fn check_connection(pool: &DbPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(|e| Error::database(e, "Database connectivity check failed"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_sqlite_pool() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 5,
            auto_create_schema: false,
            ..Default::default()
        };

        let pool = create_pool(&config).await.unwrap();
        check_connection(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_database_url() {
        let config = DatabaseConfig { url: "invalid://url".to_string(), ..Default::default() };

        let result = create_pool(&config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_check_connection_on_closed_pool() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            auto_create_schema: false,
            ..Default::default()
        };

        let pool = create_pool(&config).await.unwrap();
        pool.close().await;

        let err = check_connection(&pool).await.unwrap_err();
        assert!(matches!(err, Error::Database { .. }));
    }
}
