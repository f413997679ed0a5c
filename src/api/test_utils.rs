//! Test utilities for API handler testing
//!
//! Handler unit tests call handlers directly with an `ApiState` built over a
//! private in-memory SQLite database. Full HTTP round-trips live in
//! `tests/restaurant_api.rs`.

use crate::api::routes::ApiState;
use crate::config::DatabaseConfig;
use crate::storage::{create_pool, DbPool};

/// Create a fresh in-memory pool with the restaurants table in place
pub async fn create_test_pool() -> DbPool {
    let config = DatabaseConfig { url: "sqlite::memory:".to_string(), ..Default::default() };
    create_pool(&config).await.expect("create in-memory test pool")
}

/// Create test API state over its own empty database
pub async fn create_test_state() -> ApiState {
    ApiState::from_pool(create_test_pool().await)
}
