//! Four interchangeable ways to add two numbers.
//!
//! | Strategy | Entry point | Mismatched operands |
//! |---|---|---|
//! | Regular function | [`add_int`], [`add_int64`], [`add_float32`] | rejected at compile time |
//! | Type assertion | [`add_interface`] | `None` (or an error, see [`AssertionPolicy`]) |
//! | Reflection | [`add_reflection`] | `None` |
//! | Generics | [`add_numbers`] | rejected at compile time |
//!
//! All four agree on the sum of two operands of the same representation.

use core::fmt;

use thiserror::Error;

use crate::types::Kind;

pub mod assertion;
pub mod generics;
pub mod reflection;
pub mod regular;

pub use assertion::{AssertionPolicy, add_interface, add_interface_with};
pub use generics::add_numbers;
pub use reflection::{add_reflection, add_values};
pub use regular::{add_float32, add_int, add_int64};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The second operand is not of the type the first operand selected.
    #[error("type assertion failed: second operand is not {expected}")]
    AssertionFailed { expected: Kind },
}

/// Names the dispatch strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    RegularFunction,
    TypeAssertion,
    Generics,
    Reflection,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 4] = [
        Strategy::RegularFunction,
        Strategy::TypeAssertion,
        Strategy::Generics,
        Strategy::Reflection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::RegularFunction => "RegularFunction",
            Strategy::TypeAssertion => "TypeAssertion",
            Strategy::Generics => "Generics",
            Strategy::Reflection => "Reflection",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
