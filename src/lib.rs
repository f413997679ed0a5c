//! # Restaurant Listing
//!
//! A small HTTP service that lists, fetches and creates restaurant records
//! backed by a relational store.
//!
//! ## Architecture
//!
//! ```text
//! HTTP (axum) → RestaurantService → RestaurantRepository → SQLite (sqlx)
//!      ↓               ↓
//!  RestaurantDto ⇄ Restaurant   (restaurant_mapper)
//! ```
//!
//! Every layer is constructed once at startup and handed down explicitly:
//! the router owns an [`api::ApiState`], which owns a
//! [`services::RestaurantService`], which owns an
//! `Arc<dyn storage::RestaurantRepository>`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use restaurant_listing::{api, config::AppConfig, storage, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let pool = storage::create_pool(&config.database).await?;
//!     api::start_api_server(config.server, api::ApiState::from_pool(pool)).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod services;
pub mod storage;

// Re-export commonly used types and traits
pub use config::AppConfig;
pub use errors::{Error, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "restaurant-listing");
    }
}
