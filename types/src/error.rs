use thiserror::Error;

use crate::constraint::ConstraintId;

/// Errors raised while defining types or instantiating constrained type
/// parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("{ty} does not satisfy {constraint} ({members})")]
    Unsatisfied {
        ty: String,
        constraint: ConstraintId,
        members: String,
    },

    #[error("type {found} of argument {index} does not match inferred type {expected}")]
    Mismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("cannot infer type parameter constrained by {constraint} without arguments")]
    CannotInfer { constraint: ConstraintId },

    #[error("type {name} is already declared")]
    DuplicateType { name: String },
}
