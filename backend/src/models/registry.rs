//! Model Registry
//!
//! Maps model identifiers to [`Model`] instances. The registry owns every
//! model; callers borrow them for lookups and overrides.
//!
//! Mutation goes through `&mut ModelRegistry`, so there is a single writer
//! at a time. A long-lived service sharing one registry across threads must
//! wrap it in a lock of its own.

use crate::models::config::RegistryConfig;
use crate::models::model::Model;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised by registry lookups
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),
}

/// Registry of pricing models, indexed by ID
///
/// # Example
/// ```
/// use service_cost_core_rs::{Model, ModelRegistry};
///
/// let mut registry = ModelRegistry::new();
/// registry.register("standard", Model::with_defaults("standard"));
///
/// assert!(registry.lookup("standard").is_ok());
/// assert!(registry.lookup("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, Model>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configuration
    ///
    /// Models are registered in file order, so a repeated ID keeps the
    /// last definition.
    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry = Self::new();
        for model_config in &config.models {
            let model = model_config.build();
            registry.register(model_config.id.clone(), model);
        }
        registry
    }

    /// Insert or replace the model stored under `id`
    ///
    /// # Returns
    /// The model previously registered under `id`, if any
    pub fn register(&mut self, id: impl Into<String>, model: Model) -> Option<Model> {
        let id = id.into();
        debug!(id = %id, time_rate = model.time_rate(), "registering model");
        self.models.insert(id, model)
    }

    /// Get a model by ID
    ///
    /// # Errors
    /// `RegistryError::ModelNotFound` when no model is registered under `id`.
    pub fn lookup(&self, id: &str) -> Result<&Model, RegistryError> {
        self.models
            .get(id)
            .ok_or_else(|| RegistryError::ModelNotFound(id.to_string()))
    }

    /// Get a mutable model by ID, for runtime overrides
    ///
    /// # Errors
    /// `RegistryError::ModelNotFound` when no model is registered under `id`.
    pub fn lookup_mut(&mut self, id: &str) -> Result<&mut Model, RegistryError> {
        self.models
            .get_mut(id)
            .ok_or_else(|| RegistryError::ModelNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.contains_key(id)
    }

    /// Registered model IDs, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.models.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
