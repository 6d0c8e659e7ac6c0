//! Canonical numeric representations for leaf values
//!
//! All leaf values are normalized into [`DenseMatrix`] on assignment.
//! [`Value`] is the tagged input type covering the forms user code supplies;
//! [`CscMatrix`] is the sparse form backing gradient identity maps.

mod dense;
mod sparse;

pub use dense::{DenseMatrix, Value};
pub use sparse::CscMatrix;
