//! Error types for cvxr

use crate::expr::{Shape, Sign};
use thiserror::Error;

/// Result type alias using cvxr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or validating leaves
///
/// Every failure is raised synchronously at the point of violation and
/// carries enough context for the caller to diagnose it without re-deriving
/// shapes or labels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed row/column specification at construction
    #[error("Invalid dimension spec: {reason}")]
    InvalidDimensionSpec {
        /// What was wrong with the specification
        reason: String,
    },

    /// A value's shape disagrees with a leaf's declared shape
    #[error("Shape mismatch for {leaf}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Name of the leaf being assigned
        leaf: String,
        /// The leaf's declared shape
        expected: Shape,
        /// The candidate value's shape
        got: Shape,
    },

    /// A value cannot satisfy the declared sign even after clamping
    #[error("Sign violation for {leaf}: value cannot be made {sign}")]
    SignViolation {
        /// Name of the leaf being assigned
        leaf: String,
        /// The declared sign that cannot be met
        sign: Sign,
    },

    /// Label sets disagree during a sum or product composition
    #[error("Incompatible {axis} indexes: {lhs} vs {rhs}")]
    IncompatibleIndex {
        /// Which axis disagreed ("row", "column", or "inner")
        axis: &'static str,
        /// Rendering of the left-hand label set
        lhs: String,
        /// Rendering of the right-hand label set
        rhs: String,
    },

    /// Input cannot be converted to the canonical numeric representation
    #[error("Type conversion failed: {reason}")]
    TypeConversionError {
        /// Why the conversion failed
        reason: String,
    },

    /// A labeled view was requested from a leaf lacking the labels
    #[error("{leaf} has no {axis} labels")]
    MissingLabels {
        /// Name of the leaf
        leaf: String,
        /// The axis whose labels are missing
        axis: &'static str,
    },
}

impl Error {
    /// Create an invalid dimension spec error
    pub fn invalid_dimension_spec(reason: impl Into<String>) -> Self {
        Self::InvalidDimensionSpec {
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(leaf: impl Into<String>, expected: Shape, got: Shape) -> Self {
        Self::ShapeMismatch {
            leaf: leaf.into(),
            expected,
            got,
        }
    }

    /// Create a sign violation error
    pub fn sign_violation(leaf: impl Into<String>, sign: Sign) -> Self {
        Self::SignViolation {
            leaf: leaf.into(),
            sign,
        }
    }

    /// Create an incompatible index error
    pub fn incompatible_index(
        axis: &'static str,
        lhs: impl std::fmt::Display,
        rhs: impl std::fmt::Display,
    ) -> Self {
        Self::IncompatibleIndex {
            axis,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// Create a type conversion error
    pub fn type_conversion(reason: impl Into<String>) -> Self {
        Self::TypeConversionError {
            reason: reason.into(),
        }
    }

    /// Create a missing labels error
    pub fn missing_labels(leaf: impl Into<String>, axis: &'static str) -> Self {
        Self::MissingLabels {
            leaf: leaf.into(),
            axis,
        }
    }
}
