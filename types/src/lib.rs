//! Polynum type descriptors and constraint sets.
//!
//! This crate describes, as plain data, which concrete representations a
//! constrained type parameter accepts. It is the runtime counterpart of the
//! constraint traits in `polynum-core`, and the single table both consult.
//!
//! # Example
//!
//! ```
//! use polynum_types::{ConstraintId, Kind, Ty};
//!
//! let floint = Ty::Named { name: "Floint", underlying: Kind::Float64 };
//! let point = Ty::Named { name: "Point", underlying: Kind::Int64 };
//!
//! assert!(ConstraintId::Number.has_instance(&Ty::Basic(Kind::Int64)));
//! assert!(ConstraintId::Number.has_instance(&floint));
//! assert!(!ConstraintId::Number.has_instance(&point));
//! ```

pub mod constraint;
pub mod error;
pub mod kind;
pub mod registry;
pub mod ty;

pub use constraint::{Constraint, ConstraintId};
pub use error::TypeError;
pub use kind::{Kind, KindSet};
pub use registry::TypeRegistry;
pub use ty::Ty;

static_assertions::assert_eq_size!(Kind, u8);
static_assertions::const_assert_eq!(Kind::ALL.len(), KindSet::all().bits().count_ones() as usize);
