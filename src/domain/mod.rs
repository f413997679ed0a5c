//! Domain layer
//!
//! Pure domain types with no HTTP or database framework concerns beyond the
//! SQLx codec impls on the identifier.
//!
//! - `id`: the store-assigned `RestaurantId`
//! - `restaurant`: the persisted `Restaurant` entity

pub mod id;
pub mod restaurant;

pub use id::RestaurantId;
pub use restaurant::Restaurant;
