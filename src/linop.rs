//! Backend-neutral linear-operator IR
//!
//! Canonicalizing a leaf yields a [`LinOp`] node tagged with the leaf's
//! shape (and identity, for variables and parameters) plus a list of side
//! constraints. The solver-facing lowering layer consumes these verbatim;
//! their structure is opaque to everything else in this crate.

use crate::expr::{Shape, VarId};
use crate::matrix::DenseMatrix;

/// One node of the linear-operator graph
#[derive(Clone, Debug, PartialEq)]
pub struct LinOp {
    /// What this node computes
    pub kind: LinOpKind,
    /// Shape of the node's output
    pub shape: Shape,
}

/// Payload of a [`LinOp`] node
#[derive(Clone, Debug, PartialEq)]
pub enum LinOpKind {
    /// Stand-in for a decision variable, referenced by id
    Variable(VarId),
    /// Stand-in for a parameter, referenced by id
    Param(VarId),
    /// A scalar constant
    ScalarConst(f64),
    /// A dense constant matrix
    DenseConst(DenseMatrix),
}

impl LinOp {
    /// Node standing in for a decision variable
    pub fn variable(id: VarId, shape: Shape) -> Self {
        Self {
            kind: LinOpKind::Variable(id),
            shape,
        }
    }

    /// Node standing in for a parameter
    pub fn param(id: VarId, shape: Shape) -> Self {
        Self {
            kind: LinOpKind::Param(id),
            shape,
        }
    }

    /// Node holding a constant; 1x1 matrices collapse to a scalar node
    pub fn constant(value: DenseMatrix) -> Self {
        let shape = value.shape();
        if shape.is_scalar() {
            Self {
                kind: LinOpKind::ScalarConst(value.as_slice()[0]),
                shape,
            }
        } else {
            Self {
                kind: LinOpKind::DenseConst(value),
                shape,
            }
        }
    }
}

/// Side constraint generated during canonicalization
///
/// Plain leaves never generate constraints; structurally restricted leaves
/// (semidefinite, symmetric, and so on, outside this crate) do. The
/// variants mirror what the conic lowering layer accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    /// lhs == rhs
    Eq(LinOp, LinOp),
    /// lhs <= rhs, elementwise
    Leq(LinOp, LinOp),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_constant_collapses() {
        let node = LinOp::constant(DenseMatrix::scalar(3.0));
        assert_eq!(node.kind, LinOpKind::ScalarConst(3.0));
        assert_eq!(node.shape, Shape::SCALAR);
    }

    #[test]
    fn test_variable_node_tags_id_and_shape() {
        let id = VarId::from_raw(7);
        let node = LinOp::variable(id, Shape::new(2, 3));
        assert_eq!(node, LinOp::variable(id, Shape::new(2, 3)));
        assert_ne!(node, LinOp::variable(VarId::from_raw(8), Shape::new(2, 3)));
    }
}
