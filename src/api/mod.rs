//! # REST API Components
//!
//! HTTP routing, request/response handling and API documentation for the
//! restaurant listing service.

pub mod docs;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

#[cfg(test)]
pub(crate) mod test_utils;

pub use routes::{build_router, ApiState};
pub use server::start_api_server;
