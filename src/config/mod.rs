//! # Configuration Management
//!
//! Environment-driven configuration for the restaurant listing service.
//! A `.env` file in the working directory is honoured by the binary before
//! anything is read from the environment.

mod settings;

pub use settings::{AppConfig, DatabaseConfig, ObservabilityConfig, ServerConfig};
