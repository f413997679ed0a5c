//! Restaurant business logic service
//!
//! Orchestrates repository calls and the DTO/entity mapping, separated from
//! HTTP concerns. Status-code decisions are left to the API layer.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    api::dto::RestaurantDto,
    domain::RestaurantId,
    errors::Result,
    services::restaurant_mapper::{to_dto, to_entity},
    storage::RestaurantRepository,
};

/// Service for listing, fetching and creating restaurants
#[derive(Clone)]
pub struct RestaurantService {
    repository: Arc<dyn RestaurantRepository>,
}

impl RestaurantService {
    /// Create a new restaurant service over the given repository
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    /// List every restaurant in retrieval order
    pub async fn find_all_restaurants(&self) -> Result<Vec<RestaurantDto>> {
        let restaurants = self.repository.find_all().await?;

        debug!(count = restaurants.len(), "Listed restaurants");

        Ok(restaurants.into_iter().map(to_dto).collect())
    }

    /// Fetch a single restaurant; `None` when no record has this identifier
    pub async fn fetch_restaurant_by_id(&self, id: RestaurantId) -> Result<Option<RestaurantDto>> {
        let restaurant = self.repository.find_by_id(id).await?;

        debug!(restaurant_id = %id, found = restaurant.is_some(), "Fetched restaurant");

        Ok(restaurant.map(to_dto))
    }

    /// Persist a new restaurant and return it with its assigned identifier
    ///
    /// Any client-supplied identifier is discarded so creation never
    /// overwrites an existing record.
    pub async fn save_restaurant(&self, restaurant: RestaurantDto) -> Result<RestaurantDto> {
        let mut entity = to_entity(restaurant);
        entity.id = None;

        let saved = self.repository.save(entity).await?;

        info!(
            restaurant_id = ?saved.id.map(RestaurantId::get),
            restaurant_name = %saved.name,
            "Restaurant created"
        );

        Ok(to_dto(saved))
    }
}
