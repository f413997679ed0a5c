//! Restaurant API handlers
//!
//! Thin transport layer over `RestaurantService`: path/body extraction,
//! status codes and JSON serialization. No business logic lives here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::instrument;

use crate::{
    api::{dto::RestaurantDto, error::ApiError, routes::ApiState},
    domain::RestaurantId,
};

/// List all restaurants
///
/// Always responds 200, with an empty array when nothing is stored.
#[utoipa::path(
    get,
    path = "/restaurant/fetchAllRestaurants",
    responses(
        (status = 200, description = "All restaurants", body = [RestaurantDto]),
        (status = 500, description = "Persistence failure")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn fetch_all_restaurants_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<RestaurantDto>>, ApiError> {
    let restaurants = state.restaurant_service.find_all_restaurants().await?;
    Ok(Json(restaurants))
}

/// Fetch a restaurant by identifier
///
/// Responds 404 with an empty body when no restaurant has the identifier.
#[utoipa::path(
    get,
    path = "/restaurant/fetchById/{restaurantId}",
    params(("restaurantId" = i32, Path, description = "Restaurant identifier")),
    responses(
        (status = 200, description = "Restaurant found", body = RestaurantDto),
        (status = 404, description = "No restaurant with this identifier"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn fetch_restaurant_by_id_handler(
    State(state): State<ApiState>,
    Path(restaurant_id): Path<RestaurantId>,
) -> Result<Response, ApiError> {
    let restaurant = state.restaurant_service.fetch_restaurant_by_id(restaurant_id).await?;

    Ok(match restaurant {
        Some(dto) => (StatusCode::OK, Json(dto)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// Create a restaurant
///
/// The body's `id` is ignored; the response carries the assigned one.
#[utoipa::path(
    post,
    path = "/restaurant/addRestaurant",
    request_body = RestaurantDto,
    responses(
        (status = 201, description = "Restaurant created", body = RestaurantDto),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Persistence failure")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state, payload), fields(restaurant_name = %payload.name))]
pub async fn add_restaurant_handler(
    State(state): State<ApiState>,
    Json(payload): Json<RestaurantDto>,
) -> Result<(StatusCode, Json<RestaurantDto>), ApiError> {
    let saved = state.restaurant_service.save_restaurant(payload).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
