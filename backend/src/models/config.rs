//! Registry configuration
//!
//! JSON description of the models a registry is seeded with:
//!
//! ```json
//! {
//!   "models": [
//!     {
//!       "id": "model1234",
//!       "time_rate": 500,
//!       "cost_factors": [
//!         { "name": "Risk", "grade": "high" },
//!         { "name": "Inconvenience", "grade": "medium" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `time_rate` and `cost_factors` are optional. Listed cost factors are
//! construction-time overrides merged onto the seed factors.

use crate::costs::CostFactor;
use crate::models::model::Model;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a registry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read model configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid model configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for a single model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier
    pub id: String,

    /// Time rate per 60 minutes (default: 300)
    #[serde(default)]
    pub time_rate: Option<f32>,

    /// Overrides merged onto the seed factors, in order
    #[serde(default)]
    pub cost_factors: Vec<CostFactor>,
}

impl ModelConfig {
    /// Construct the model this entry describes
    pub fn build(&self) -> Model {
        Model::new(self.id.clone(), self.time_rate, self.cost_factors.iter().cloned())
    }
}

/// Full registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub models: Vec<ModelConfig>,
}

impl Default for RegistryConfig {
    /// Built-in catalogue: `model1234` at rate 500 with `Risk:high` and
    /// `Inconvenience:medium`
    fn default() -> Self {
        Self {
            models: vec![ModelConfig {
                id: "model1234".to_string(),
                time_rate: Some(500.0),
                cost_factors: vec![
                    CostFactor::new("Risk", "high"),
                    CostFactor::new("Inconvenience", "medium"),
                ],
            }],
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading model configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
