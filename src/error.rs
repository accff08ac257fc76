//! Error type for walk construction and measurement.
//!
//! All failures are local precondition violations; nothing here is retryable.
//! Shape mismatches *inside* the algebra layer are programming-contract
//! violations and panic instead (see `algebra`); `WalkError::DimensionMismatch`
//! covers the one boundary where a caller hands in a matrix of their own.

use std::fmt;

/// Precondition failures reported by the walk engine.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkError {
    /// The step count `t` must be at least 1.
    InvalidStepCount,
    /// The supplied coin state is not unit-norm within tolerance.
    NotNormalized { norm: f64 },
    /// The sampling stride must be at least 1.
    InvalidStride,
    /// A caller-supplied matrix has the wrong dimension for the step count.
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidStepCount => {
                write!(f, "step count must be a positive integer")
            }
            WalkError::NotNormalized { norm } => {
                write!(f, "coin state is not normalized (norm = {norm})")
            }
            WalkError::InvalidStride => {
                write!(f, "sampling stride must be a positive integer")
            }
            WalkError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for WalkError {}

/// Tolerance for unit-norm and unitarity checks.
pub const NORM_TOL: f64 = 1e-9;

/// Trace drift above this is logged as a warning after evolution.
pub const DRIFT_TOL: f64 = 1e-6;
