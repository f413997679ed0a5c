//! Restaurant repository
//!
//! Find-all, find-by-id and upsert over the `restaurants` table. This is the
//! only surface the service layer consumes from the store.

use crate::domain::{Restaurant, RestaurantId};
use crate::errors::{Error, Result};
use crate::storage::DbPool;
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::instrument;

// Database row structures

#[derive(Debug, Clone, FromRow)]
struct RestaurantRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: String,
}

impl TryFrom<RestaurantRow> for Restaurant {
    type Error = Error;

    fn try_from(row: RestaurantRow) -> Result<Self> {
        let id = i32::try_from(row.id).map_err(|_| {
            Error::internal(format!("Restaurant id {} does not fit in a 32-bit integer", row.id))
        })?;

        Ok(Restaurant {
            id: Some(RestaurantId::new(id)),
            name: row.name,
            address: row.address,
            city: row.city,
            description: row.description,
        })
    }
}

// Repository trait

/// Persistence operations the restaurant service depends on
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Every stored restaurant, in the store's natural order
    async fn find_all(&self) -> Result<Vec<Restaurant>>;

    /// The restaurant with the given identifier, if any
    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>>;

    /// Insert when `id` is `None` (the store assigns one), otherwise upsert
    async fn save(&self, restaurant: Restaurant) -> Result<Restaurant>;
}

// SQLx implementation

#[derive(Debug, Clone)]
pub struct SqlxRestaurantRepository {
    pool: DbPool,
}

impl SqlxRestaurantRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for SqlxRestaurantRepository {
    #[instrument(skip(self), name = "db_find_all_restaurants")]
    async fn find_all(&self) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query_as::<_, RestaurantRow>(
            "SELECT id, name, address, city, description FROM restaurants ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Error::database(e, "Failed to list restaurants"))?;

        rows.into_iter().map(Restaurant::try_from).collect()
    }

    #[instrument(skip(self), fields(restaurant_id = %id), name = "db_find_restaurant_by_id")]
    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            "SELECT id, name, address, city, description FROM restaurants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::database(e, format!("Failed to fetch restaurant by ID: {}", id)))?;

        row.map(Restaurant::try_from).transpose()
    }

    #[instrument(
        skip(self, restaurant),
        fields(restaurant_id = ?restaurant.id, restaurant_name = %restaurant.name),
        name = "db_save_restaurant"
    )]
    async fn save(&self, restaurant: Restaurant) -> Result<Restaurant> {
        let row = match restaurant.id {
            None => sqlx::query_as::<_, RestaurantRow>(
                "INSERT INTO restaurants (name, address, city, description)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, address, city, description",
            )
            .bind(&restaurant.name)
            .bind(&restaurant.address)
            .bind(&restaurant.city)
            .bind(&restaurant.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Error::database(e, "Failed to create restaurant"))?,
            Some(id) => sqlx::query_as::<_, RestaurantRow>(
                "INSERT INTO restaurants (id, name, address, city, description)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    address = excluded.address,
                    city = excluded.city,
                    description = excluded.description
                RETURNING id, name, address, city, description",
            )
            .bind(id)
            .bind(&restaurant.name)
            .bind(&restaurant.address)
            .bind(&restaurant.city)
            .bind(&restaurant.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Error::database(e, format!("Failed to save restaurant: {}", id)))?,
        };

        row.try_into()
    }
}
