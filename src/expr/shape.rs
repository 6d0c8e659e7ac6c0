//! Shape type: (rows, cols) dimensions of an expression

use std::fmt;

/// Dimensions of an expression as a (rows, cols) pair
///
/// Every expression in the modeling layer is at most two-dimensional.
/// A scalar has shape (1, 1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    /// The scalar shape (1, 1)
    pub const SCALAR: Shape = Shape { rows: 1, cols: 1 };

    /// Create a shape from row and column extents
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of entries (rows * cols)
    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether this is the scalar shape (1, 1)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// View as a (rows, cols) tuple
    #[inline]
    pub fn as_pair(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape() {
        assert!(Shape::SCALAR.is_scalar());
        assert!(Shape::new(1, 1).is_scalar());
        assert!(!Shape::new(2, 1).is_scalar());
        assert_eq!(Shape::SCALAR.size(), 1);
    }

    #[test]
    fn test_size_and_display() {
        let s = Shape::new(3, 4);
        assert_eq!(s.size(), 12);
        assert_eq!(s.as_pair(), (3, 4));
        assert_eq!(s.to_string(), "(3, 4)");
    }
}
