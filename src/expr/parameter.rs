//! Parameter: a named constant leaf whose value is supplied before solving

use crate::error::Result;
use crate::expr::dim::{resolve_dims, DimSpec};
use crate::expr::id::{next_leaf_id, IdAllocator};
use crate::expr::leaf::Leaf;
use crate::expr::{LabelSet, Shape, Sign, VarId};
use crate::linop::{Constraint, LinOp};
use crate::matrix::{DenseMatrix, Value};

/// Prefix for auto-generated parameter names
const PARAM_PREFIX: &str = "param";

/// A problem parameter with a declared sign
///
/// Parameters share the variable id space, carry optional labels exactly
/// like variables, and validate assigned values the same way. Unlike a
/// variable they contribute no decision variables to a problem.
pub struct Parameter {
    id: VarId,
    name: String,
    shape: Shape,
    index: Option<LabelSet>,
    columns: Option<LabelSet>,
    sign: Sign,
    value: Option<DenseMatrix>,
}

impl Parameter {
    /// Create a parameter with the given declared sign
    pub fn new(rows: impl Into<DimSpec>, cols: impl Into<DimSpec>, sign: Sign) -> Result<Self> {
        Self::build(rows.into(), cols.into(), sign, None, None)
    }

    /// Create a parameter with an explicit name
    pub fn with_name(
        rows: impl Into<DimSpec>,
        cols: impl Into<DimSpec>,
        sign: Sign,
        name: impl Into<String>,
    ) -> Result<Self> {
        Self::build(rows.into(), cols.into(), sign, Some(name.into()), None)
    }

    /// Create a parameter drawing its id from a caller-supplied allocator
    pub fn new_with_allocator(
        rows: impl Into<DimSpec>,
        cols: impl Into<DimSpec>,
        sign: Sign,
        ids: &IdAllocator,
    ) -> Result<Self> {
        Self::build(rows.into(), cols.into(), sign, None, Some(ids))
    }

    fn build(
        rows: DimSpec,
        cols: DimSpec,
        sign: Sign,
        name: Option<String>,
        ids: Option<&IdAllocator>,
    ) -> Result<Self> {
        let (shape, index, columns) = resolve_dims(rows, cols)?;
        let id = match ids {
            Some(ids) => ids.next_id(),
            None => next_leaf_id(),
        };
        let name = name.unwrap_or_else(|| format!("{}{}", PARAM_PREFIX, id));
        Ok(Self {
            id,
            name,
            shape,
            index,
            columns,
            sign,
            value: None,
        })
    }

    /// The parameter's process-unique id
    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Assign a value, validated against the declared shape and sign
    pub fn set_value(&mut self, val: impl Into<Value>) -> Result<()> {
        let validated = self.validate_value(val.into())?;
        self.value = Some(validated);
        Ok(())
    }

    /// Clear the value slot
    pub fn clear_value(&mut self) {
        self.value = None;
    }
}

impl Leaf for Parameter {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sign(&self) -> Sign {
        self.sign
    }

    fn value(&self) -> Option<&DenseMatrix> {
        self.value.as_ref()
    }

    fn index(&self) -> Option<&LabelSet> {
        self.index.as_ref()
    }

    fn columns(&self) -> Option<&LabelSet> {
        self.columns.as_ref()
    }

    fn canonicalize(&self) -> (LinOp, Vec<Constraint>) {
        (LinOp::param(self.id, self.shape), Vec::new())
    }
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("sign", &self.sign)
            .field("has_value", &self.value.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_sign_clamping_applies() {
        let mut p = Parameter::new(2, 1, Sign::Positive).unwrap();
        p.set_value(vec![-1.0, 3.0]).unwrap();
        assert_eq!(p.value().unwrap().as_slice(), [0.0, 3.0]);
    }

    #[test]
    fn test_no_decision_variables() {
        let p = Parameter::new(2, 2, Sign::Unknown).unwrap();
        assert!(p.variables().is_empty());
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let mut p = Parameter::new(2, 1, Sign::Unknown).unwrap();
        let err = p.set_value(vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }
}
