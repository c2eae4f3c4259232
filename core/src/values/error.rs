use thiserror::Error;

use crate::types::Kind;

/// Errors from constructing or extracting a [`Value`](super::Value).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A typed extraction found a different kind.
    #[error("expected a value of kind {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },

    /// A widened accessor or constructor was used with a kind of another
    /// class, e.g. `float()` on an `int64` value.
    #[error("value of kind {found} is not a {expected}")]
    NotA { expected: &'static str, found: Kind },
}
