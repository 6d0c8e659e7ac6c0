//! Index algebra for labeled dimensions
//!
//! Stateless rules computing the row/column label sets of an elementwise
//! sum or matrix product. Labels must already match exactly; no dynamic
//! re-indexing or alignment is performed, so callers needing alignment must
//! reindex before combining.

use crate::error::{Error, Result};
use crate::expr::{LabelSet, Shape};

/// The (row, column) label sets of one operand
pub type AxisLabels<'a> = (Option<&'a LabelSet>, Option<&'a LabelSet>);

/// Labels resulting from elementwise-summing a sequence of operands
///
/// Operands that declare no labels on an axis are compatible with any
/// labeling there. Among operands that do declare labels on an axis, all
/// label sets must be equal in content and order, else the sum fails with
/// [`Error::IncompatibleIndex`]. The result carries the common labeled set
/// per axis, or none when no operand declared one.
pub fn sum_indexes(operands: &[AxisLabels<'_>]) -> Result<(Option<LabelSet>, Option<LabelSet>)> {
    let index = merge_axis("row", operands.iter().map(|op| op.0))?;
    let columns = merge_axis("column", operands.iter().map(|op| op.1))?;
    Ok((index, columns))
}

fn merge_axis<'a>(
    axis: &'static str,
    operands: impl Iterator<Item = Option<&'a LabelSet>>,
) -> Result<Option<LabelSet>> {
    let mut merged: Option<&LabelSet> = None;
    for labels in operands.flatten() {
        match merged {
            None => merged = Some(labels),
            Some(first) => {
                if first != labels {
                    return Err(Error::incompatible_index(axis, first, labels));
                }
            }
        }
    }
    Ok(merged.cloned())
}

/// Labels resulting from matrix-multiplying two operands
///
/// A scalar operand never constrains labels: the result inherits the other
/// operand's labels unchanged. Otherwise the inner labels (left columns vs
/// right rows) must be equal when both are present, else the product fails
/// with [`Error::IncompatibleIndex`]; the result takes the left operand's
/// row labels and the right operand's column labels.
pub fn mul_indexes(
    lhs: AxisLabels<'_>,
    rhs: AxisLabels<'_>,
    lh_shape: Shape,
    rh_shape: Shape,
) -> Result<(Option<LabelSet>, Option<LabelSet>)> {
    if lh_shape.is_scalar() {
        return Ok((rhs.0.cloned(), rhs.1.cloned()));
    }
    if rh_shape.is_scalar() {
        return Ok((lhs.0.cloned(), lhs.1.cloned()));
    }
    if let (Some(inner_l), Some(inner_r)) = (lhs.1, rhs.0) {
        if inner_l != inner_r {
            return Err(Error::incompatible_index("inner", inner_l, inner_r));
        }
    }
    Ok((lhs.0.cloned(), rhs.1.cloned()))
}
