//! Cost Calculator
//!
//! Combines elapsed time, direct money and a model into a final cost:
//!
//! ```text
//! unadjusted = (time_minutes / 60) * time_rate + direct_money
//! multiplier = product of the model's cost factor adjustments
//! total      = round(unadjusted * multiplier)
//! ```
//!
//! # Precision
//!
//! Every step runs in `f32`, in the order shown (divide by 60 first). This
//! reproduces the single-precision results of the calculator this crate
//! replaces, including which side of a `.5` tie a value lands on: 11
//! minutes at 300/hour plus 0.5 is exactly 55.5 in `f32`, while the same
//! expression in `f64` gives 55.49999999999999.
//!
//! # Rounding
//!
//! `total` uses [`f32::round`]: ties round half away from zero, so
//! `0.5 → 1`, `2.5 → 3` and `-0.5 → -1`. Negative ties therefore differ
//! from a round-half-up rule (`-0.5 → 0`).

pub mod quote;

pub use quote::{CalculationError, Quote};

use crate::costs::{GradeError, GradeTable};
use crate::models::Model;
use serde::Serialize;
use tracing::debug;

/// Intermediate figures of one cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Time cost plus direct money, before adjustment
    pub unadjusted: f32,
    /// Cumulative cost factor multiplier
    pub multiplier: f32,
    /// Rounded final cost
    pub total: i64,
}

/// Compute the full breakdown of a cost calculation
///
/// # Errors
/// `GradeError::UnknownGrade` if any of the model's factors has a grade
/// outside the grade table. No partial result is returned.
pub fn cost_breakdown(
    time_minutes: f32,
    model: &Model,
    direct_money: f32,
) -> Result<CostBreakdown, GradeError> {
    let unadjusted = (time_minutes / 60.0) * model.time_rate() + direct_money;
    let multiplier = model.cumulative_cost_factor(&GradeTable)?;
    let total = round_half_away_from_zero(unadjusted * multiplier);

    debug!(
        model = model.id(),
        time_minutes,
        direct_money,
        unadjusted,
        multiplier,
        total,
        "computed cost"
    );

    Ok(CostBreakdown {
        unadjusted,
        multiplier,
        total,
    })
}

/// Compute the rounded cost of an action
///
/// # Example
/// ```
/// use service_cost_core_rs::{compute_cost, Model};
///
/// // 60 minutes at 300/hour, seed factors (1.1 × 2.0)
/// let model = Model::with_defaults("standard");
/// assert_eq!(compute_cost(60.0, &model, 0.0).unwrap(), 660);
/// ```
pub fn compute_cost(time_minutes: f32, model: &Model, direct_money: f32) -> Result<i64, GradeError> {
    cost_breakdown(time_minutes, model, direct_money).map(|breakdown| breakdown.total)
}

/// Round to the nearest integer, ties away from zero
///
/// Values beyond the `i64` range saturate.
pub fn round_half_away_from_zero(value: f32) -> i64 {
    value.round() as i64
}
