//! Pricing model
//!
//! A model couples a time rate (currency units per hour) with a set of
//! custom cost factors. Every model starts from the same seed factors and
//! then merges caller-supplied overrides into them.
//!
//! Overrides supplied at construction and overrides applied later through
//! [`Model::add_or_update_cost_factor`] follow the same upsert rule: an
//! existing name has its grade replaced in place, a new name is appended.

use crate::costs::{CostFactor, CostFactorSet, GradeError, GradeTable};
use serde::Serialize;
use tracing::debug;

/// Time rate used when a model does not set its own (per 60 minutes)
pub const DEFAULT_TIME_RATE: f32 = 300.0;

/// Seed factors every model starts from: `Risk:low`, `Inconvenience:high`
pub fn default_cost_factors() -> CostFactorSet {
    [
        CostFactor::new("Risk", "low"),
        CostFactor::new("Inconvenience", "high"),
    ]
    .into_iter()
    .collect()
}

/// A named pricing model
///
/// # Example
/// ```
/// use service_cost_core_rs::{CostFactor, Model};
///
/// let mut model = Model::new(
///     "model1234",
///     Some(500.0),
///     vec![CostFactor::new("Risk", "high"), CostFactor::new("Inconvenience", "medium")],
/// );
/// assert_eq!(model.time_rate(), 500.0);
/// assert_eq!(model.cost_factors().len(), 2);
///
/// model.add_or_update_cost_factor(CostFactor::new("Travel", "low"));
/// assert_eq!(model.cost_factors().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    /// Model identifier (e.g. "model1234")
    id: String,

    /// Rate charged per 60 minutes of elapsed time
    time_rate: f32,

    /// Custom cost factors, seeded then merged with overrides
    cost_factors: CostFactorSet,
}

impl Model {
    /// Create a model from the seed defaults
    ///
    /// # Arguments
    /// * `id` - Model identifier
    /// * `time_rate` - Explicit time rate, or `None` for [`DEFAULT_TIME_RATE`]
    /// * `overrides` - Factors upserted onto the seed set, in order
    pub fn new(
        id: impl Into<String>,
        time_rate: Option<f32>,
        overrides: impl IntoIterator<Item = CostFactor>,
    ) -> Self {
        let mut cost_factors = default_cost_factors();
        cost_factors.extend(overrides);

        let model = Self {
            id: id.into(),
            time_rate: time_rate.unwrap_or(DEFAULT_TIME_RATE),
            cost_factors,
        };
        debug!(
            id = %model.id,
            time_rate = model.time_rate,
            factors = model.cost_factors.len(),
            "built model"
        );
        model
    }

    /// Create a model with the default time rate and seed factors only
    pub fn with_defaults(id: impl Into<String>) -> Self {
        Self::new(id, None, Vec::new())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rate charged per 60 minutes of elapsed time
    pub fn time_rate(&self) -> f32 {
        self.time_rate
    }

    pub fn set_time_rate(&mut self, time_rate: f32) {
        debug!(id = %self.id, from = self.time_rate, to = time_rate, "changing time rate");
        self.time_rate = time_rate;
    }

    pub fn cost_factors(&self) -> &CostFactorSet {
        &self.cost_factors
    }

    /// Apply a runtime override to this model's cost factors
    pub fn add_or_update_cost_factor(&mut self, factor: CostFactor) {
        debug!(id = %self.id, factor = %factor.name, grade = %factor.grade, "applying override");
        self.cost_factors.upsert(factor);
    }

    /// Cumulative multiplier of all cost factors
    ///
    /// # Errors
    /// Propagates `GradeError::UnknownGrade` from the grade table.
    pub fn cumulative_cost_factor(&self, grades: &GradeTable) -> Result<f32, GradeError> {
        self.cost_factors.cumulative_multiplier(grades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let seed = default_cost_factors();
        assert_eq!(seed.position("Risk"), Some(0));
        assert_eq!(seed.position("Inconvenience"), Some(1));
    }

    #[test]
    fn test_set_time_rate() {
        let mut model = Model::with_defaults("m");
        model.set_time_rate(450.0);
        assert_eq!(model.time_rate(), 450.0);
    }
}
