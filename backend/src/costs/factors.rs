//! Custom cost factors
//!
//! A cost factor is a named, graded adjustment (e.g. `Risk:low`). A model
//! carries an ordered set of them; their grades fold through the
//! [`GradeTable`] into one cumulative multiplier.
//!
//! # Critical Invariants
//!
//! 1. **Unique names**: at most one factor per name (case-sensitive)
//! 2. **Stable positions**: updating an existing name never moves it

use crate::costs::grades::{GradeError, GradeTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A named cost factor holding a severity grade
///
/// The grade is stored as given. It is only checked against the grade
/// table when the multiplier is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostFactor {
    /// Identity key within a set (e.g. "Risk", "Inconvenience")
    pub name: String,
    /// Grade name (e.g. "low", "high")
    pub grade: String,
}

impl CostFactor {
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
        }
    }
}

/// Ordered collection of cost factors with unique names
///
/// # Example
/// ```
/// use service_cost_core_rs::{CostFactor, CostFactorSet, GradeTable};
///
/// let mut set = CostFactorSet::new();
/// set.upsert(CostFactor::new("Risk", "low"));
/// set.upsert(CostFactor::new("Inconvenience", "high"));
/// set.upsert(CostFactor::new("Risk", "medium")); // updated in place
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get("Risk").unwrap().grade, "medium");
/// assert!((set.cumulative_multiplier(&GradeTable).unwrap() - 2.6).abs() < 1e-6);
/// ```
///
/// Serializes as a plain list. Deserializing merges repeated names through
/// [`CostFactorSet::upsert`], so the later grade wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CostFactor>", into = "Vec<CostFactor>")]
pub struct CostFactorSet {
    factors: Vec<CostFactor>,
}

impl CostFactorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a factor, or update the grade of the factor with the same name
    ///
    /// An existing entry keeps its position; a new name is appended.
    pub fn upsert(&mut self, factor: CostFactor) {
        match self.factors.iter_mut().find(|f| f.name == factor.name) {
            Some(existing) => {
                debug!(
                    factor = %factor.name,
                    from = %existing.grade,
                    to = %factor.grade,
                    "updating cost factor"
                );
                existing.grade = factor.grade;
            }
            None => {
                debug!(factor = %factor.name, grade = %factor.grade, "adding cost factor");
                self.factors.push(factor);
            }
        }
    }

    /// Product of every factor's grade adjustment, starting from 1.0
    ///
    /// An empty set yields exactly 1.0.
    ///
    /// # Errors
    /// `GradeError::UnknownGrade` for the first factor whose grade is not in
    /// the table. No factor is skipped.
    pub fn cumulative_multiplier(&self, grades: &GradeTable) -> Result<f32, GradeError> {
        self.factors.iter().try_fold(1.0_f32, |acc, factor| {
            let adjustment = grades.adjustment_for(&factor.grade)?;
            trace!(factor = %factor.name, grade = %factor.grade, adjustment, "folding cost factor");
            Ok(acc * adjustment)
        })
    }

    /// Get a factor by name
    pub fn get(&self, name: &str) -> Option<&CostFactor> {
        self.factors.iter().find(|f| f.name == name)
    }

    /// Position of the factor with `name` in insertion order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.factors.iter().position(|f| f.name == name)
    }

    /// Iterate factors in order
    pub fn iter(&self) -> std::slice::Iter<'_, CostFactor> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl<'a> IntoIterator for &'a CostFactorSet {
    type Item = &'a CostFactor;
    type IntoIter = std::slice::Iter<'a, CostFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

impl FromIterator<CostFactor> for CostFactorSet {
    /// Build a set by upserting each factor in order
    fn from_iter<I: IntoIterator<Item = CostFactor>>(iter: I) -> Self {
        let mut set = CostFactorSet::new();
        for factor in iter {
            set.upsert(factor);
        }
        set
    }
}

impl From<Vec<CostFactor>> for CostFactorSet {
    fn from(factors: Vec<CostFactor>) -> Self {
        factors.into_iter().collect()
    }
}

impl From<CostFactorSet> for Vec<CostFactor> {
    fn from(set: CostFactorSet) -> Self {
        set.factors
    }
}

impl Extend<CostFactor> for CostFactorSet {
    fn extend<I: IntoIterator<Item = CostFactor>>(&mut self, iter: I) {
        for factor in iter {
            self.upsert(factor);
        }
    }
}
