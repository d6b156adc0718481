//! Service Cost Core - Rust Engine
//!
//! Prices a service action from elapsed time, direct money and a named
//! pricing model.
//!
//! # Architecture
//!
//! - **costs**: Grade table and custom cost factors
//! - **models**: Pricing models, registry and configuration
//! - **calculator**: Final cost computation and rounding
//!
//! # Critical Invariants
//!
//! 1. Grade lookups never fall back to a default factor
//! 2. A cost factor set holds at most one factor per name
//! 3. Overrides update factors in place, never reorder them
//! 4. Final costs round half away from zero

// Module declarations
pub mod calculator;
pub mod costs;
pub mod models;

// Re-exports for convenience
pub use calculator::{
    compute_cost, cost_breakdown, round_half_away_from_zero, CalculationError, CostBreakdown,
    Quote,
};
pub use costs::{CostFactor, CostFactorSet, Grade, GradeError, GradeTable};
pub use models::{
    default_cost_factors, ConfigError, Model, ModelConfig, ModelRegistry, RegistryConfig,
    RegistryError, DEFAULT_TIME_RATE,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn service_cost_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::calculator::PyCostCalculator>()?;
    Ok(())
}
