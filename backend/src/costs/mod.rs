//! Cost Grades and Factors
//!
//! This module provides:
//! - The fixed grade table (`grades`)
//! - Named cost factors and their ordered set (`factors`)

pub mod factors;
pub mod grades;

// Re-exports
pub use factors::{CostFactor, CostFactorSet};
pub use grades::{Grade, GradeError, GradeTable};
