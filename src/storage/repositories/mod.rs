//! Repository implementations over the SQLite pool

pub mod restaurant;

pub use restaurant::{RestaurantRepository, SqlxRestaurantRepository};
