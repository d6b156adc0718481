//! Pricing models and their registry

pub mod config;
pub mod model;
pub mod registry;

// Re-exports
pub use config::{ConfigError, ModelConfig, RegistryConfig};
pub use model::{default_cost_factors, Model, DEFAULT_TIME_RATE};
pub use registry::{ModelRegistry, RegistryError};
