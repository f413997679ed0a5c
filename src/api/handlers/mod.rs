//! HTTP request handlers organized by resource type

pub mod health;
pub mod restaurants;

pub use health::health_handler;
pub use restaurants::{
    add_restaurant_handler, fetch_all_restaurants_handler, fetch_restaurant_by_id_handler,
};
