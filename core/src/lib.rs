//! Addition over several numeric types, four ways.
//!
//! - [`dispatch`] holds the per-type, type-assertion, reflection and generic
//!   addition functions.
//! - [`constraints`] maps the constraint sets of [`types`] onto trait bounds.
//! - [`generic`] has the small generic utilities (`reverse`, `contains`,
//!   `keys`, `min`) and the `Floint`/`Point` named types.
//! - [`harness`] times the strategies against each other.

pub use polynum_types as types;

pub mod constraints;
pub mod dispatch;
pub mod generic;
pub mod harness;
mod newtype;
pub mod values;

pub use constraints::{Float, Integer, Number, Numeric, Ordered, Signed, Underlying, Unsigned};
pub use dispatch::{DispatchError, Strategy};
pub use harness::{Harness, HarnessError, HarnessOptions, NumericType, Report};
pub use values::{Bridge, Value, ValueError};

// Exports some symbols publicly so that `numeric_newtype!` can refer to them.
#[doc(hidden)]
pub mod __private {
    pub use static_assertions;
}
