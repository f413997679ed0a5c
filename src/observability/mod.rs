//! # Observability Infrastructure
//!
//! Structured logging for the restaurant listing service. HTTP request spans
//! come from `tower_http::trace::TraceLayer` in the router; repository calls
//! carry their own `#[instrument]` spans.

pub mod logging;

pub use logging::{init_logging, log_config_info};
