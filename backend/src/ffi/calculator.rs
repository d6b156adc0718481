//! PyO3 wrapper for the model registry and cost calculator
//!
//! # Example (from Python)
//!
//! ```python
//! from service_cost_core_rs import CostCalculator
//!
//! calc = CostCalculator()  # built-in catalogue (model1234)
//! calc.register_model("standard")
//! calc.add_or_update_cost_factor("standard", "Risk", "medium")
//! print(calc.compute_cost(60.0, "standard", 0.0))  # 780
//! ```

use pyo3::prelude::*;

use crate::calculator::compute_cost;
use crate::costs::{CostFactor, GradeError};
use crate::models::{Model, ModelRegistry, RegistryConfig, RegistryError};

fn registry_err(err: RegistryError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyKeyError, _>(err.to_string())
}

fn grade_err(err: GradeError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for a Rust `ModelRegistry`
#[pyclass(name = "CostCalculator")]
pub struct PyCostCalculator {
    inner: ModelRegistry,
}

#[pymethods]
impl PyCostCalculator {
    /// Create a calculator seeded with the built-in catalogue
    #[new]
    fn new() -> Self {
        PyCostCalculator {
            inner: ModelRegistry::from_config(&RegistryConfig::default()),
        }
    }

    /// Create a calculator with no registered models
    #[staticmethod]
    fn empty() -> Self {
        PyCostCalculator {
            inner: ModelRegistry::new(),
        }
    }

    /// Create a calculator from a JSON model configuration string
    ///
    /// # Errors
    ///
    /// Raises ValueError if the JSON does not describe a registry.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = RegistryConfig::from_json_str(json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(PyCostCalculator {
            inner: ModelRegistry::from_config(&config),
        })
    }

    /// Register (or replace) a model
    ///
    /// `cost_factors` is a list of `(name, grade)` pairs merged onto the
    /// seed factors.
    #[pyo3(signature = (id, time_rate=None, cost_factors=None))]
    fn register_model(
        &mut self,
        id: String,
        time_rate: Option<f32>,
        cost_factors: Option<Vec<(String, String)>>,
    ) {
        let overrides = cost_factors
            .unwrap_or_default()
            .into_iter()
            .map(|(name, grade)| CostFactor::new(name, grade));
        let model = Model::new(id.clone(), time_rate, overrides);
        self.inner.register(id, model);
    }

    /// Apply a runtime override to a registered model
    ///
    /// # Errors
    ///
    /// Raises KeyError if the model is not registered.
    fn add_or_update_cost_factor(&mut self, model_id: &str, name: String, grade: String) -> PyResult<()> {
        let model = self.inner.lookup_mut(model_id).map_err(registry_err)?;
        model.add_or_update_cost_factor(CostFactor::new(name, grade));
        Ok(())
    }

    /// Compute the rounded cost for a registered model
    ///
    /// # Errors
    ///
    /// Raises KeyError for an unknown model and ValueError for an unknown grade.
    fn compute_cost(&self, time: f32, model_id: &str, money: f32) -> PyResult<i64> {
        let model = self.inner.lookup(model_id).map_err(registry_err)?;
        compute_cost(time, model, money).map_err(grade_err)
    }

    /// Registered model IDs, sorted
    fn model_ids(&self) -> Vec<String> {
        self.inner.ids().into_iter().map(str::to_string).collect()
    }
}
