//! Labeled dimension specifiers
//!
//! A leaf's row and column extents are declared either as plain integers or
//! as sequences of axis labels. `DimSpec` is the tagged specifier for one
//! axis; `resolve_dims` applies the construction rules for a (rows, cols)
//! pair and yields the resulting [`Shape`] plus per-axis label sets.

use std::fmt;

use crate::error::{Error, Result};
use crate::expr::Shape;

/// Ordered set of unique labels for one axis
///
/// Equality requires the same labels in the same order; no re-alignment is
/// ever performed on label sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Create a label set, rejecting duplicates
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(Error::invalid_dimension_spec(format!(
                    "duplicate label {:?} in axis labels",
                    label
                )));
            }
        }
        Ok(Self(labels))
    }

    /// Number of labels
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the label set is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View labels as a slice
    pub fn as_slice(&self) -> &[String] {
        self.0.as_slice()
    }

    /// Iterate over labels in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Position of a label within the axis, if present
    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|l| l == label)
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", label)?;
        }
        write!(f, "]")
    }
}

/// Specifier for one axis of a leaf: a plain extent or a labeled extent
///
/// The variant is chosen by the caller, so no runtime type inspection is
/// needed to tell integers from label sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DimSpec {
    /// Unlabeled axis with the given extent
    Extent(usize),
    /// Labeled axis; the extent is the number of labels
    Labels(LabelSet),
}

impl DimSpec {
    /// Create a labeled specifier, rejecting duplicate labels
    pub fn labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Labels(LabelSet::new(labels)?))
    }

    /// The extent this specifier declares
    pub fn extent(&self) -> usize {
        match self {
            DimSpec::Extent(n) => *n,
            DimSpec::Labels(labels) => labels.len(),
        }
    }
}

impl From<usize> for DimSpec {
    fn from(extent: usize) -> Self {
        Self::Extent(extent)
    }
}

impl From<LabelSet> for DimSpec {
    fn from(labels: LabelSet) -> Self {
        Self::Labels(labels)
    }
}

/// Resolve a (rows, cols) specifier pair into a shape and per-axis labels
///
/// Rules:
/// - both extents plain: the shape is exactly those extents, no labels;
/// - labeled rows with a plain column extent: the extent must be 1;
/// - labeled columns require labeled rows.
///
/// Violations fail with [`Error::InvalidDimensionSpec`].
pub fn resolve_dims(
    rows: DimSpec,
    cols: DimSpec,
) -> Result<(Shape, Option<LabelSet>, Option<LabelSet>)> {
    match (rows, cols) {
        (DimSpec::Extent(r), DimSpec::Extent(c)) => Ok((Shape::new(r, c), None, None)),
        (DimSpec::Labels(index), DimSpec::Extent(c)) => {
            if c != 1 {
                return Err(Error::invalid_dimension_spec(format!(
                    "labeled rows allow only a single unlabeled column, got extent {}",
                    c
                )));
            }
            Ok((Shape::new(index.len(), 1), Some(index), None))
        }
        (DimSpec::Extent(_), DimSpec::Labels(_)) => Err(Error::invalid_dimension_spec(
            "column labels require row labels",
        )),
        (DimSpec::Labels(index), DimSpec::Labels(columns)) => Ok((
            Shape::new(index.len(), columns.len()),
            Some(index),
            Some(columns),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_set_rejects_duplicates() {
        let err = LabelSet::new(["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensionSpec { .. }));
    }

    #[test]
    fn test_label_set_order_matters() {
        let ab = LabelSet::new(["a", "b"]).unwrap();
        let ba = LabelSet::new(["b", "a"]).unwrap();
        assert_ne!(ab, ba);
        assert_eq!(ab.position("b"), Some(1));
        assert_eq!(ab.position("z"), None);
    }

    #[test]
    fn test_resolve_plain_extents() {
        let (shape, index, columns) = resolve_dims(3.into(), 4.into()).unwrap();
        assert_eq!(shape, Shape::new(3, 4));
        assert!(index.is_none());
        assert!(columns.is_none());
    }

    #[test]
    fn test_resolve_labeled_rows() {
        let rows = DimSpec::labels(["x", "y", "z"]).unwrap();
        let (shape, index, columns) = resolve_dims(rows, 1.into()).unwrap();
        assert_eq!(shape, Shape::new(3, 1));
        assert_eq!(index.unwrap().len(), 3);
        assert!(columns.is_none());
    }

    #[test]
    fn test_labeled_rows_reject_wide_plain_columns() {
        let rows = DimSpec::labels(["x", "y"]).unwrap();
        let err = resolve_dims(rows, 2.into()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensionSpec { .. }));
    }

    #[test]
    fn test_columns_without_rows_rejected() {
        let cols = DimSpec::labels(["p", "q"]).unwrap();
        let err = resolve_dims(2.into(), cols).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensionSpec { .. }));
    }

    #[test]
    fn test_resolve_both_labeled() {
        let rows = DimSpec::labels(["x", "y"]).unwrap();
        let cols = DimSpec::labels(["p", "q", "r"]).unwrap();
        let (shape, index, columns) = resolve_dims(rows, cols).unwrap();
        assert_eq!(shape, Shape::new(2, 3));
        assert_eq!(index.unwrap().as_slice(), ["x", "y"]);
        assert_eq!(columns.unwrap().as_slice(), ["p", "q", "r"]);
    }
}
