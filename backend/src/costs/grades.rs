//! Grade Table
//!
//! Fixed mapping from named severity grades to multiplicative adjustment
//! factors. The table is compiled in and closed: there is no way to add or
//! change a grade at runtime.
//!
//! | Grade    | Adjustment |
//! |----------|------------|
//! | `none`   | 1.0        |
//! | `low`    | 1.1        |
//! | `medium` | 1.3        |
//! | `high`   | 2.0        |
//!
//! Adjustments are single-precision (`f32`), as is all cost arithmetic.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by grade lookups
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("Unknown grade '{0}' (expected one of: none, low, medium, high)")]
    UnknownGrade(String),
}

/// A known severity grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    None,
    Low,
    Medium,
    High,
}

impl Grade {
    /// All grades in ascending order of severity
    pub const ALL: [Grade; 4] = [Grade::None, Grade::Low, Grade::Medium, Grade::High];

    /// Lowercase name used in overrides and configuration files
    pub fn name(self) -> &'static str {
        match self {
            Grade::None => "none",
            Grade::Low => "low",
            Grade::Medium => "medium",
            Grade::High => "high",
        }
    }

    /// Multiplicative adjustment factor for this grade
    pub fn adjustment(self) -> f32 {
        match self {
            Grade::None => 1.0,
            Grade::Low => 1.1,
            Grade::Medium => 1.3,
            Grade::High => 2.0,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    /// Exact, case-sensitive match on the lowercase grade name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.name() == s)
            .ok_or_else(|| GradeError::UnknownGrade(s.to_string()))
    }
}

/// Process-wide, read-only grade table
///
/// Zero-sized: every consumer shares the same compiled-in entries.
///
/// # Example
/// ```
/// use service_cost_core_rs::GradeTable;
///
/// let table = GradeTable;
/// assert_eq!(table.adjustment_for("high").unwrap(), 2.0);
/// assert!(table.adjustment_for("extreme").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeTable;

impl GradeTable {
    /// Get the adjustment factor for a grade name
    ///
    /// # Errors
    /// `GradeError::UnknownGrade` when `grade` is not one of the four entries.
    /// Unknown grades never fall back to a default factor.
    pub fn adjustment_for(&self, grade: &str) -> Result<f32, GradeError> {
        grade.parse::<Grade>().map(Grade::adjustment)
    }

    /// Whether `grade` names an entry of the table
    pub fn contains(&self, grade: &str) -> bool {
        grade.parse::<Grade>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_names_round_trip_through_from_str() {
        for grade in Grade::ALL {
            assert_eq!(grade.name().parse::<Grade>(), Ok(grade));
        }
    }

    #[test]
    fn test_grade_lookup_is_case_sensitive() {
        assert_eq!(
            "High".parse::<Grade>(),
            Err(GradeError::UnknownGrade("High".to_string()))
        );
    }
}
