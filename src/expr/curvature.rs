//! Curvature classification for DCP analysis

use std::fmt;

/// Curvature of an expression under the DCP rules
///
/// Affine expressions are simultaneously convex and concave; every true
/// leaf is affine. Composite atoms (outside this crate's scope) produce the
/// other classifications.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Curvature {
    /// Convex and concave at once
    Affine,
    /// Convex only
    Convex,
    /// Concave only
    Concave,
    /// Neither verified convex nor concave
    Unknown,
}

impl Curvature {
    /// Whether expressions of this curvature are convex
    #[inline]
    pub fn is_convex(&self) -> bool {
        matches!(self, Curvature::Affine | Curvature::Convex)
    }

    /// Whether expressions of this curvature are concave
    #[inline]
    pub fn is_concave(&self) -> bool {
        matches!(self, Curvature::Affine | Curvature::Concave)
    }

    /// Whether this curvature is affine
    #[inline]
    pub fn is_affine(&self) -> bool {
        matches!(self, Curvature::Affine)
    }
}

impl fmt::Display for Curvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Curvature::Affine => "affine",
            Curvature::Convex => "convex",
            Curvature::Concave => "concave",
            Curvature::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
