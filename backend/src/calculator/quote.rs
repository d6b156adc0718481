//! One-shot quote
//!
//! Bundles the inputs of a single calculation: resolve the model, apply
//! runtime overrides to it, then compute.

use crate::calculator::{cost_breakdown, CostBreakdown};
use crate::costs::{CostFactor, GradeError};
use crate::models::{ModelRegistry, RegistryError};
use thiserror::Error;

/// Errors that abort a quote
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error(transparent)]
    Grade(#[from] GradeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Inputs of a single cost calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Elapsed time in minutes
    pub time_minutes: f32,
    /// Direct monetary cost (negative for credits)
    pub direct_money: f32,
    /// Registered model to price against
    pub model_id: String,
    /// Runtime overrides, applied in order
    pub overrides: Vec<CostFactor>,
}

impl Quote {
    /// Evaluate against a registry
    ///
    /// Overrides are written to the registered model, so they persist for
    /// later lookups of the same registry.
    ///
    /// # Errors
    /// - `CalculationError::Registry` if `model_id` is not registered
    /// - `CalculationError::Grade` if any factor grade is unknown
    pub fn evaluate(&self, registry: &mut ModelRegistry) -> Result<CostBreakdown, CalculationError> {
        let model = registry.lookup_mut(&self.model_id)?;
        for factor in &self.overrides {
            model.add_or_update_cost_factor(factor.clone());
        }
        Ok(cost_breakdown(self.time_minutes, model, self.direct_money)?)
    }
}
