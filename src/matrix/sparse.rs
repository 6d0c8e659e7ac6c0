//! CSC (Compressed Sparse Column) matrix
//!
//! Minimal sparse form used for gradient identity maps: column pointers,
//! row indices, values. Structural equality is derived so callers can
//! compare gradients directly.

use crate::error::{Error, Result};
use crate::expr::Shape;

/// Compressed Sparse Column matrix of f64 entries
#[derive(Clone, Debug, PartialEq)]
pub struct CscMatrix {
    col_ptrs: Vec<usize>,
    row_indices: Vec<usize>,
    values: Vec<f64>,
    shape: Shape,
}

impl CscMatrix {
    /// Create a CSC matrix from components
    pub fn new(
        col_ptrs: Vec<usize>,
        row_indices: Vec<usize>,
        values: Vec<f64>,
        shape: Shape,
    ) -> Result<Self> {
        if col_ptrs.len() != shape.cols + 1 {
            return Err(Error::type_conversion(format!(
                "CSC col_ptrs length {} does not match {} columns",
                col_ptrs.len(),
                shape.cols
            )));
        }
        if row_indices.len() != values.len() {
            return Err(Error::type_conversion(format!(
                "CSC row_indices length {} does not match {} values",
                row_indices.len(),
                values.len()
            )));
        }
        if let Some(&last) = col_ptrs.last() {
            if last != values.len() {
                return Err(Error::type_conversion(format!(
                    "CSC col_ptrs end at {} but there are {} values",
                    last,
                    values.len()
                )));
            }
        }
        Ok(Self {
            col_ptrs,
            row_indices,
            values,
            shape,
        })
    }

    /// The n x n identity matrix
    pub fn identity(n: usize) -> Self {
        Self {
            col_ptrs: (0..=n).collect(),
            row_indices: (0..n).collect(),
            values: vec![1.0; n],
            shape: Shape::new(n, n),
        }
    }

    /// The matrix shape
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of structurally non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Column pointer array, length cols + 1
    pub fn col_ptrs(&self) -> &[usize] {
        &self.col_ptrs
    }

    /// Row index of every stored entry
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Stored entry values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Entry at (row, col), zero when not stored
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let start = self.col_ptrs[col];
        let end = self.col_ptrs[col + 1];
        for k in start..end {
            if self.row_indices[k] == row {
                return self.values[k];
            }
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_structure() {
        let eye = CscMatrix::identity(3);
        assert_eq!(eye.shape(), Shape::new(3, 3));
        assert_eq!(eye.nnz(), 3);
        assert_eq!(eye.col_ptrs(), [0, 1, 2, 3]);
        assert_eq!(eye.get(1, 1), 1.0);
        assert_eq!(eye.get(0, 1), 0.0);
    }

    #[test]
    fn test_new_validates_lengths() {
        let err = CscMatrix::new(vec![0, 1], vec![0, 1], vec![1.0], Shape::new(2, 1));
        assert!(err.is_err());
    }

    #[test]
    fn test_identity_equality() {
        assert_eq!(CscMatrix::identity(4), CscMatrix::identity(4));
        assert_ne!(CscMatrix::identity(4), CscMatrix::identity(5));
    }
}
