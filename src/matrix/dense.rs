//! Dense column-major matrix: the canonical value representation

use crate::error::{Error, Result};
use crate::expr::Shape;

/// Dense matrix of f64 entries in column-major order
///
/// Every value handed to a leaf is converted into this representation
/// before validation. Column-major layout matches the flattening order used
/// by the gradient identity map.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    shape: Shape,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create from column-major data and a shape
    ///
    /// Fails with [`Error::TypeConversionError`] when the data length does
    /// not match the shape.
    pub fn from_vec(data: Vec<f64>, shape: Shape) -> Result<Self> {
        if data.len() != shape.size() {
            return Err(Error::type_conversion(format!(
                "{} entries cannot fill shape {}",
                data.len(),
                shape
            )));
        }
        Ok(Self { shape, data })
    }

    /// Create a 1x1 matrix holding a single value
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Shape::SCALAR,
            data: vec![value],
        }
    }

    /// Create an all-zero matrix
    pub fn zeros(shape: Shape) -> Self {
        Self {
            data: vec![0.0; shape.size()],
            shape,
        }
    }

    /// The matrix shape
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Total number of entries
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Entries in column-major order
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Entry at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[col * self.shape.rows + row]
    }

    /// One column as a contiguous slice
    pub fn column(&self, col: usize) -> &[f64] {
        let rows = self.shape.rows;
        &self.data[col * rows..(col + 1) * rows]
    }

    /// One row, gathered across columns
    pub fn row(&self, row: usize) -> Vec<f64> {
        (0..self.shape.cols).map(|c| self.get(row, c)).collect()
    }

    /// Apply a function to every entry, consuming the matrix
    pub fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        for x in &mut self.data {
            *x = f(*x);
        }
        self
    }
}

/// Tagged input value for leaf assignment
///
/// The variant is chosen by the caller; conversion into [`DenseMatrix`]
/// happens once, at assignment time, and fails with
/// [`Error::TypeConversionError`] on malformed structure.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single scalar, shape (1, 1)
    Scalar(f64),
    /// A column vector, shape (n, 1)
    Vector(Vec<f64>),
    /// Row-by-row matrix literal; all rows must have equal length
    Rows(Vec<Vec<f64>>),
    /// An already-canonical matrix
    Dense(DenseMatrix),
}

impl Value {
    /// Convert into the canonical dense representation
    pub fn into_matrix(self) -> Result<DenseMatrix> {
        match self {
            Value::Scalar(x) => Ok(DenseMatrix::scalar(x)),
            Value::Vector(data) => {
                if data.is_empty() {
                    return Err(Error::type_conversion("empty vector value"));
                }
                let shape = Shape::new(data.len(), 1);
                DenseMatrix::from_vec(data, shape)
            }
            Value::Rows(rows) => {
                if rows.is_empty() {
                    return Err(Error::type_conversion("empty matrix value"));
                }
                let ncols = rows[0].len();
                if ncols == 0 {
                    return Err(Error::type_conversion("matrix value with empty rows"));
                }
                for (i, row) in rows.iter().enumerate() {
                    if row.len() != ncols {
                        return Err(Error::type_conversion(format!(
                            "ragged matrix value: row 0 has {} entries, row {} has {}",
                            ncols,
                            i,
                            row.len()
                        )));
                    }
                }
                let nrows = rows.len();
                let mut data = Vec::with_capacity(nrows * ncols);
                for c in 0..ncols {
                    for row in &rows {
                        data.push(row[c]);
                    }
                }
                DenseMatrix::from_vec(data, Shape::new(nrows, ncols))
            }
            Value::Dense(matrix) => Ok(matrix),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(data: Vec<f64>) -> Self {
        Value::Vector(data)
    }
}

impl From<&[f64]> for Value {
    fn from(data: &[f64]) -> Self {
        Value::Vector(data.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for Value {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Value::Rows(rows)
    }
}

impl From<DenseMatrix> for Value {
    fn from(matrix: DenseMatrix) -> Self {
        Value::Dense(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversion() {
        let m = Value::from(2.5).into_matrix().unwrap();
        assert_eq!(m.shape(), Shape::SCALAR);
        assert_eq!(m.as_slice(), [2.5]);
    }

    #[test]
    fn test_vector_is_column() {
        let m = Value::from(vec![1.0, 2.0, 3.0]).into_matrix().unwrap();
        assert_eq!(m.shape(), Shape::new(3, 1));
        assert_eq!(m.get(2, 0), 3.0);
    }

    #[test]
    fn test_rows_column_major_layout() {
        let m = Value::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
            .into_matrix()
            .unwrap();
        assert_eq!(m.shape(), Shape::new(2, 2));
        assert_eq!(m.as_slice(), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.row(1), [3.0, 4.0]);
        assert_eq!(m.column(1), [2.0, 4.0]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Value::from(vec![vec![1.0, 2.0], vec![3.0]])
            .into_matrix()
            .unwrap_err();
        assert!(matches!(err, Error::TypeConversionError { .. }));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(Value::Vector(vec![]).into_matrix().is_err());
        assert!(Value::Rows(vec![]).into_matrix().is_err());
        assert!(Value::Rows(vec![vec![]]).into_matrix().is_err());
    }

    #[test]
    fn test_from_vec_length_check() {
        let err = DenseMatrix::from_vec(vec![1.0, 2.0], Shape::new(3, 1)).unwrap_err();
        assert!(matches!(err, Error::TypeConversionError { .. }));
    }

    #[test]
    fn test_map() {
        let m = DenseMatrix::from_vec(vec![-1.0, 2.0], Shape::new(2, 1)).unwrap();
        let clamped = m.map(|x| x.max(0.0));
        assert_eq!(clamped.as_slice(), [0.0, 2.0]);
    }
}
