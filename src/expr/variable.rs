//! Variable: a decision variable leaf

use std::collections::HashMap;

use crate::error::Result;
use crate::expr::dim::{resolve_dims, DimSpec};
use crate::expr::id::{next_leaf_id, IdAllocator};
use crate::expr::leaf::Leaf;
use crate::expr::{LabelSet, Shape, Sign, VarId};
use crate::linop::{Constraint, LinOp};
use crate::matrix::{CscMatrix, DenseMatrix, Value};

/// Prefix for auto-generated variable names
const VAR_PREFIX: &str = "var";

/// A decision variable
///
/// Owns a process-unique id, optional row/column labels, and a mutable
/// primal value slot. Shape, labels, sign, and id are fixed at
/// construction; only the value slot changes afterward.
pub struct Variable {
    id: VarId,
    name: String,
    shape: Shape,
    index: Option<LabelSet>,
    columns: Option<LabelSet>,
    sign: Sign,
    value: Option<DenseMatrix>,
}

impl Variable {
    /// Create a variable of unknown sign
    ///
    /// `rows` and `cols` accept plain extents or labeled specifiers; see
    /// [`resolve_dims`] for the construction rules.
    pub fn new(rows: impl Into<DimSpec>, cols: impl Into<DimSpec>) -> Result<Self> {
        Self::build(rows.into(), cols.into(), Sign::Unknown, None, None)
    }

    /// Create a variable with an explicit name
    pub fn with_name(
        rows: impl Into<DimSpec>,
        cols: impl Into<DimSpec>,
        name: impl Into<String>,
    ) -> Result<Self> {
        Self::build(rows.into(), cols.into(), Sign::Unknown, Some(name.into()), None)
    }

    /// Create a variable declared entrywise non-negative
    pub fn nonneg(rows: impl Into<DimSpec>, cols: impl Into<DimSpec>) -> Result<Self> {
        Self::build(rows.into(), cols.into(), Sign::Positive, None, None)
    }

    /// Create a variable declared entrywise non-positive
    pub fn nonpos(rows: impl Into<DimSpec>, cols: impl Into<DimSpec>) -> Result<Self> {
        Self::build(rows.into(), cols.into(), Sign::Negative, None, None)
    }

    /// Create a variable drawing its id from a caller-supplied allocator
    ///
    /// Used by tests that need deterministic ids.
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
        let name = name.unwrap_or_else(|| format!("{}{}", VAR_PREFIX, id));
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

    /// The variable's process-unique id
    #[inline]
    pub fn id(&self) -> VarId {
        self.id
    }

    /// Assign a value to the primal slot
    ///
    /// The value is validated against the declared shape and sign; see
    /// [`Leaf::validate_value`] for the clamping policy.
    pub fn set_value(&mut self, val: impl Into<Value>) -> Result<()> {
        let validated = self.validate_value(val.into())?;
        self.value = Some(validated);
        Ok(())
    }

    /// Clear the primal slot
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Gradient of the variable with respect to itself
    ///
    /// The identity linear map over the column-major flattening of the
    /// variable's entries, keyed by its own id.
    pub fn grad(&self) -> HashMap<VarId, CscMatrix> {
        let n = self.shape.size();
        let mut grad = HashMap::with_capacity(1);
        grad.insert(self.id, CscMatrix::identity(n));
        grad
    }
}

impl Leaf for Variable {
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

    fn variables(&self) -> Vec<VarId> {
        vec![self.id]
    }

    fn canonicalize(&self) -> (LinOp, Vec<Constraint>) {
        (LinOp::variable(self.id, self.shape), Vec::new())
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variable")
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

    #[test]
    fn test_auto_name_embeds_id() {
        let x = Variable::new(2, 2).unwrap();
        assert_eq!(x.name(), format!("{}{}", VAR_PREFIX, x.id()));
    }

    #[test]
    fn test_explicit_name_kept() {
        let x = Variable::with_name(1, 1, "budget").unwrap();
        assert_eq!(x.name(), "budget");
    }

    #[test]
    fn test_deterministic_ids_with_local_allocator() {
        let ids = IdAllocator::new(100);
        let x = Variable::new_with_allocator(1, 1, Sign::Unknown, &ids).unwrap();
        let y = Variable::new_with_allocator(1, 1, Sign::Unknown, &ids).unwrap();
        assert_eq!(x.id().raw(), 100);
        assert_eq!(y.id().raw(), 101);
    }

    #[test]
    fn test_grad_is_flattened_identity() {
        let x = Variable::new(2, 3).unwrap();
        let grad = x.grad();
        assert_eq!(grad.len(), 1);
        assert_eq!(grad[&x.id()], CscMatrix::identity(6));
    }
}
