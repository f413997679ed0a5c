//! Wire representation of a restaurant

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Restaurant as exchanged over HTTP
///
/// On creation the `id` may be omitted and is ignored if present; every
/// response carries the store-assigned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[schema(example = "Restaurant 1")]
    pub name: String,
    #[schema(example = "Address 1")]
    pub address: String,
    #[schema(example = "city 1")]
    pub city: String,
    #[schema(example = "Desc 1")]
    pub description: String,
}
