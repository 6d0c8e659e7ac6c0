//! Leaf expressions and their attributes
//!
//! The data model for atomic symbolic expressions: shapes, declared signs,
//! curvature, labeled dimensions, identities, and the concrete leaf types
//! (variables, parameters, constants).

mod constant;
mod curvature;
mod dim;
mod id;
mod leaf;
mod parameter;
mod scalar_atom;
mod shape;
mod sign;
mod variable;
pub mod view;

pub use constant::Constant;
pub use curvature::Curvature;
pub use dim::{resolve_dims, DimSpec, LabelSet};
pub use id::{next_leaf_id, IdAllocator, VarId};
pub use leaf::Leaf;
pub use parameter::Parameter;
pub use scalar_atom::ScalarAtom;
pub use shape::Shape;
pub use sign::Sign;
pub use variable::Variable;
