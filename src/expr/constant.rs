//! Constant: a leaf wrapping a fixed numeric value

use crate::error::Result;
use crate::expr::leaf::Leaf;
use crate::expr::{Shape, Sign};
use crate::linop::{Constraint, LinOp};
use crate::matrix::{DenseMatrix, Value};

/// A fixed numeric leaf
///
/// The value is converted to the canonical matrix form at construction and
/// never changes; shape and sign are inferred from it. Constants carry no
/// labels and no identity.
pub struct Constant {
    value: DenseMatrix,
    sign: Sign,
}

impl Constant {
    /// Wrap a value, converting it to the canonical form
    ///
    /// Conversion failures surface immediately as
    /// [`crate::error::Error::TypeConversionError`].
    pub fn new(val: impl Into<Value>) -> Result<Self> {
        let value = val.into().into_matrix()?;
        let sign = Sign::from_entries(value.as_slice());
        Ok(Self { value, sign })
    }

    /// The wrapped matrix
    pub fn matrix(&self) -> &DenseMatrix {
        &self.value
    }
}

impl Leaf for Constant {
    fn shape(&self) -> Shape {
        self.value.shape()
    }

    fn name(&self) -> &str {
        "constant"
    }

    fn sign(&self) -> Sign {
        self.sign
    }

    fn value(&self) -> Option<&DenseMatrix> {
        Some(&self.value)
    }

    fn canonicalize(&self) -> (LinOp, Vec<Constraint>) {
        (LinOp::constant(self.value.clone()), Vec::new())
    }
}

impl std::fmt::Debug for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constant")
            .field("shape", &self.value.shape())
            .field("sign", &self.sign)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linop::LinOpKind;

    #[test]
    fn test_sign_inferred_from_entries() {
        assert_eq!(Constant::new(2.0).unwrap().sign(), Sign::Positive);
        assert_eq!(
            Constant::new(vec![-1.0, -2.0]).unwrap().sign(),
            Sign::Negative
        );
        assert_eq!(
            Constant::new(vec![-1.0, 2.0]).unwrap().sign(),
            Sign::Unknown
        );
    }

    #[test]
    fn test_scalar_canonicalizes_to_scalar_node() {
        let c = Constant::new(4.5).unwrap();
        let (node, constraints) = c.canonicalize();
        assert_eq!(node.kind, LinOpKind::ScalarConst(4.5));
        assert!(constraints.is_empty());
    }

    #[test]
    fn test_matrix_shape_inferred() {
        let c = Constant::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(c.shape(), Shape::new(2, 2));
        assert!(c.index().is_none());
        assert!(c.columns().is_none());
    }
}
