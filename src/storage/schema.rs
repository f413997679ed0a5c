//! # Table Bootstrap
//!
//! Creates the `restaurants` table when it is missing. There is no version
//! tracking here: the statement is idempotent and runs on every startup when
//! `auto_create_schema` is enabled.

use tracing::Instrument;

use crate::errors::{Error, Result};
use crate::storage::DbPool;

const CREATE_RESTAURANTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS restaurants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    description TEXT NOT NULL
)";

/// Ensure the restaurants table exists
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(CREATE_RESTAURANTS_TABLE)
        .execute(pool)
        .instrument(crate::db_span!("ensure_schema", table = "restaurants"))
        .await
        .map_err(|e| Error::database(e, "Failed to create restaurants table"))?;

    tracing::debug!(table = "restaurants", "Schema ensured");
    Ok(())
}
