//! Restaurant entity as held by the persistence layer

use serde::{Deserialize, Serialize};

use super::RestaurantId;

/// A restaurant record in its persisted shape
///
/// `id` is `None` until the store has saved the record; every record read
/// back from the store carries `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Option<RestaurantId>,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: String,
}

impl Restaurant {
    /// Build a record that has not been persisted yet
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: address.into(),
            city: city.into(),
            description: description.into(),
        }
    }

    /// Attach an identifier, e.g. to target an existing row on save
    pub fn with_id(mut self, id: RestaurantId) -> Self {
        self.id = Some(id);
        self
    }
}
