//! Labeled views over leaf values
//!
//! Thin access structures handed to presentation helpers: a [`Series`] for
//! leaves with row labels only, a [`Frame`] for leaves with both axes
//! labeled. Rendering itself lives outside this crate.

use crate::expr::LabelSet;
use crate::matrix::DenseMatrix;

/// Row-labeled view of a column leaf
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Row labels, one per entry
    pub index: LabelSet,
    /// Current entries in label order, absent when the leaf has no value
    pub data: Option<Vec<f64>>,
}

impl Series {
    /// Entry at the given row label
    pub fn get(&self, label: &str) -> Option<f64> {
        let pos = self.index.position(label)?;
        self.data.as_ref().map(|data| data[pos])
    }
}

/// Fully labeled view of a matrix leaf
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Row labels
    pub index: LabelSet,
    /// Column labels
    pub columns: LabelSet,
    /// Current value, absent when the leaf has no value
    pub data: Option<DenseMatrix>,
}

impl Frame {
    /// Entry at the given (row label, column label)
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.index.position(row)?;
        let c = self.columns.position(col)?;
        self.data.as_ref().map(|m| m.get(r, c))
    }
}
