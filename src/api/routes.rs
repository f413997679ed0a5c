use std::sync::Arc;

use axum::{
    extract::Request,
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    services::RestaurantService,
    storage::{DbPool, SqlxRestaurantRepository},
};

use super::{
    docs,
    handlers::{
        add_restaurant_handler, fetch_all_restaurants_handler, fetch_restaurant_by_id_handler,
        health_handler,
    },
};

/// Shared state handed to every handler, assembled once at startup
#[derive(Clone)]
pub struct ApiState {
    pub restaurant_service: RestaurantService,
    pub pool: DbPool,
}

impl ApiState {
    /// Wire the SQLx repository and restaurant service over a pool
    pub fn from_pool(pool: DbPool) -> Self {
        let repository = Arc::new(SqlxRestaurantRepository::new(pool.clone()));
        Self { restaurant_service: RestaurantService::new(repository), pool }
    }
}

/// Cross-origin requests are accepted from any origin
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

pub fn build_router(state: ApiState) -> Router {
    let restaurant_api = Router::new()
        .route("/fetchAllRestaurants", get(fetch_all_restaurants_handler))
        .route("/fetchById/{restaurantId}", get(fetch_restaurant_by_id_handler))
        .route("/addRestaurant", post(add_restaurant_handler));

    Router::new()
        .nest("/restaurant", restaurant_api)
        .route("/health", get(health_handler))
        .with_state(state)
        .merge(docs::docs_router())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            crate::request_span!(request.method(), request.uri().path())
        }))
}
