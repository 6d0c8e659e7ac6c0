//! # cvxr
//!
//! **Symbolic modeling core for convex optimization.**
//!
//! cvxr provides the leaf data model of a convex modeling layer: decision
//! variables, parameters, and constants with shape, sign, and curvature
//! tracking, a labeled-dimension algebra, and canonicalization into a
//! backend-neutral linear-operator IR.
//!
//! ## What it does
//!
//! - **Leaves**: variables, parameters, and constants with immutable shape,
//!   labels, and declared sign, plus a mutable value slot
//! - **Labeled dimensions**: optional ordered row/column label sets, checked
//!   for exact compatibility when expressions are summed or multiplied
//! - **Validation**: values are converted to a canonical dense matrix,
//!   shape-checked, and clamped to the declared sign's boundary
//! - **Canonicalization**: every leaf lowers to a linear-operator node plus
//!   side constraints, ready for conic-form translation
//!
//! Numerical solving, the DCP rule engine for composite atoms, and tabular
//! rendering are external collaborators, not part of this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use cvxr::prelude::*;
//!
//! # fn main() -> cvxr::error::Result<()> {
//! let mut x = Variable::nonneg(DimSpec::labels(["mon", "tue", "wed"])?, 1)?;
//! x.set_value(vec![1.0, -0.5, 2.0])?; // -0.5 clamps to 0
//!
//! let (node, constraints) = x.canonicalize();
//! assert!(constraints.is_empty());
//! assert_eq!(x.as_series()?.get("wed"), Some(2.0));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod expr;
pub mod index;
pub mod linop;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::expr::{
        Constant, Curvature, DimSpec, IdAllocator, LabelSet, Leaf, Parameter, ScalarAtom, Shape,
        Sign, VarId, Variable,
    };
    pub use crate::index::{mul_indexes, sum_indexes};
    pub use crate::linop::{Constraint, LinOp, LinOpKind};
    pub use crate::matrix::{CscMatrix, DenseMatrix, Value};
}
