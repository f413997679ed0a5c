//! Data transfer objects for the REST API

pub mod restaurant;

pub use restaurant::RestaurantDto;
