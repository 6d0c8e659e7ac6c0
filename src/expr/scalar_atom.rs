//! Structural contract for scalar-reducing atoms

use crate::expr::{LabelSet, Shape};

/// Contract for atoms that always reduce to a scalar
///
/// Norms, traces, and other aggregating atoms (defined outside this crate)
/// produce shape (1, 1) regardless of their arguments and never carry axis
/// labels. The provided methods pin that contract so every implementor
/// answers shape and label queries identically.
pub trait ScalarAtom {
    /// The shape of the atom's result: always (1, 1)
    fn shape_from_args(&self) -> Shape {
        Shape::SCALAR
    }

    /// The (row, column) labels of the atom's result: always absent
    fn index_from_args(&self) -> (Option<LabelSet>, Option<LabelSet>) {
        (None, None)
    }
}
