//! Business logic services
//!
//! Services sit between the HTTP handlers and the repositories. They hold no
//! per-request state and are shared behind `Arc`/`Clone`.

pub mod restaurant_mapper;
pub mod restaurant_service;

pub use restaurant_service::RestaurantService;
