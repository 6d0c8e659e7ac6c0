//! Leaf trait: the capability set shared by all atomic expressions

use crate::error::{Error, Result};
use crate::expr::view::{Frame, Series};
use crate::expr::{Curvature, LabelSet, Shape, Sign, VarId};
use crate::linop::{Constraint, LinOp};
use crate::matrix::{DenseMatrix, Value};

/// An atomic (non-composite) symbolic expression
///
/// Variables, parameters, and constants are leaves. A leaf stores its shape,
/// optional per-axis label sets, and declared sign; it is always affine and
/// lowers itself into a single linear-operator node on canonicalization.
///
/// Shape, labels, and sign are immutable after construction. Only the value
/// slot of a variable or parameter may change.
pub trait Leaf {
    /// The leaf's declared shape
    fn shape(&self) -> Shape;

    /// Human-readable name, used in diagnostics
    fn name(&self) -> &str;

    /// The leaf's declared sign
    fn sign(&self) -> Sign;

    /// Current value, if one has been assigned
    fn value(&self) -> Option<&DenseMatrix>;

    /// Lower into a linear-operator node plus generated side constraints
    ///
    /// Idempotent and side-effect free: repeated calls on an unmodified
    /// leaf yield structurally equal results, and the leaf itself is never
    /// mutated.
    fn canonicalize(&self) -> (LinOp, Vec<Constraint>);

    /// Row labels, if the leaf was constructed with them
    fn index(&self) -> Option<&LabelSet> {
        None
    }

    /// Column labels, if the leaf was constructed with them
    fn columns(&self) -> Option<&LabelSet> {
        None
    }

    /// The (rows, cols) dimensions
    fn size(&self) -> (usize, usize) {
        self.shape().as_pair()
    }

    /// Leaves are affine
    fn curvature(&self) -> Curvature {
        Curvature::Affine
    }

    /// Is the expression convex? Always true for a leaf.
    fn is_convex(&self) -> bool {
        true
    }

    /// Is the expression concave? Always true for a leaf.
    fn is_concave(&self) -> bool {
        true
    }

    /// Leaves are quadratic
    fn is_quadratic(&self) -> bool {
        true
    }

    /// Constraints describing where the expression is finite
    ///
    /// Default is the full domain: no constraints.
    fn domain(&self) -> Vec<Constraint> {
        Vec::new()
    }

    /// Ids of the decision variables this leaf contains
    ///
    /// Empty by default; a variable returns its own id.
    fn variables(&self) -> Vec<VarId> {
        Vec::new()
    }

    /// Check a candidate value against the leaf's declared attributes
    ///
    /// Converts the input into the canonical matrix form, checks the shape
    /// exactly, then applies the sign policy: entries violating a declared
    /// `Positive` or `Negative` sign are clamped to the zero boundary, and
    /// the assignment fails with [`Error::SignViolation`] only when an entry
    /// admits no feasible clamped value (a NaN can satisfy neither
    /// orientation). An `Unknown` sign performs no check at all.
    fn validate_value(&self, val: Value) -> Result<DenseMatrix> {
        let matrix = val.into_matrix()?;
        if matrix.shape() != self.shape() {
            return Err(Error::shape_mismatch(
                self.name(),
                self.shape(),
                matrix.shape(),
            ));
        }
        clamp_to_sign(self.name(), self.sign(), matrix)
    }

    /// Row-labeled view of the leaf's value
    ///
    /// Fails with a usage error when the leaf has no row labels, or when it
    /// also has column labels (use [`Leaf::as_frame`] then).
    fn as_series(&self) -> Result<Series> {
        let index = self
            .index()
            .ok_or_else(|| Error::missing_labels(self.name(), "row"))?;
        if self.columns().is_some() {
            return Err(Error::invalid_dimension_spec(format!(
                "{} has column labels, use as_frame()",
                self.name()
            )));
        }
        Ok(Series {
            index: index.clone(),
            data: self.value().map(|m| m.as_slice().to_vec()),
        })
    }

    /// Fully labeled view of the leaf's value
    ///
    /// Fails with a usage error when the leaf lacks column labels.
    fn as_frame(&self) -> Result<Frame> {
        let columns = self
            .columns()
            .ok_or_else(|| Error::missing_labels(self.name(), "column"))?;
        let index = self
            .index()
            .ok_or_else(|| Error::missing_labels(self.name(), "row"))?;
        Ok(Frame {
            index: index.clone(),
            columns: columns.clone(),
            data: self.value().cloned(),
        })
    }
}

/// Apply the sign policy to a shape-checked value
///
/// Out-of-range entries are clamped to the zero boundary rather than
/// rejected; rejection happens only when an entry can satisfy neither
/// clamping direction.
pub(crate) fn clamp_to_sign(leaf: &str, sign: Sign, matrix: DenseMatrix) -> Result<DenseMatrix> {
    match sign {
        Sign::Unknown => Ok(matrix),
        Sign::Positive => {
            if matrix.as_slice().iter().any(|x| x.is_nan()) {
                return Err(Error::sign_violation(leaf, sign));
            }
            Ok(matrix.map(|x| x.max(0.0)))
        }
        Sign::Negative => {
            if matrix.as_slice().iter().any(|x| x.is_nan()) {
                return Err(Error::sign_violation(leaf, sign));
            }
            Ok(matrix.map(|x| x.min(0.0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_positive_mixed_entries() {
        let m = DenseMatrix::from_vec(vec![-1.0, 2.0, -3.0], Shape::new(3, 1)).unwrap();
        let clamped = clamp_to_sign("x", Sign::Positive, m).unwrap();
        assert_eq!(clamped.as_slice(), [0.0, 2.0, 0.0]);
    }

    #[test]
    fn test_clamp_negative_mixed_entries() {
        let m = DenseMatrix::from_vec(vec![-1.0, 2.0], Shape::new(2, 1)).unwrap();
        let clamped = clamp_to_sign("x", Sign::Negative, m).unwrap();
        assert_eq!(clamped.as_slice(), [-1.0, 0.0]);
    }

    #[test]
    fn test_clamp_all_violating_still_succeeds() {
        let m = DenseMatrix::from_vec(vec![-1.0, -2.0], Shape::new(2, 1)).unwrap();
        let clamped = clamp_to_sign("x", Sign::Positive, m).unwrap();
        assert_eq!(clamped.as_slice(), [0.0, 0.0]);
    }

    #[test]
    fn test_unknown_sign_passes_through() {
        let m = DenseMatrix::from_vec(vec![-1.0, 2.0], Shape::new(2, 1)).unwrap();
        let out = clamp_to_sign("x", Sign::Unknown, m.clone()).unwrap();
        assert_eq!(out, m);
    }

    #[test]
    fn test_infeasible_entry_is_sign_violation() {
        let m = DenseMatrix::from_vec(vec![f64::NAN, 1.0], Shape::new(2, 1)).unwrap();
        let err = clamp_to_sign("x", Sign::Positive, m).unwrap_err();
        assert!(matches!(err, Error::SignViolation { .. }));
    }
}
