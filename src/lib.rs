//! Polynum - four ways to add two numbers, and the constraint sets behind them
//!
//! # Overview
//!
//! The same addition is written four times:
//!
//! 1. **Regular functions**: one per type ([`add_int`], [`add_int64`], [`add_float32`])
//! 2. **Type assertion**: downcasting `&dyn Any` operands ([`add_interface`])
//! 3. **Reflection**: inspecting runtime kinds ([`add_reflection`])
//! 4. **Generics**: a single function bounded by [`Number`] ([`add_numbers`])
//!
//! Type-parameter bounds come from predeclared constraint sets ([`ConstraintId`]).
//! A constraint lists each member either exactly or approximately; only
//! approximate members admit distinct named types with that representation.
//!
//! # Quick Start
//!
//! ```
//! use polynum::{Value, add_interface, add_numbers, add_reflection};
//!
//! assert_eq!(add_numbers(4isize, 6), 10);
//! assert_eq!(add_reflection(3i64, 12i64), Some(Value::from(15i64)));
//! assert_eq!(add_interface(&5i64, &8i32), None);
//! ```
//!
//! # Named Types
//!
//! `Number` is `int | int64 | float32 | ~float64`. A named type over `float64`
//! satisfies it, a named type over `int64` does not:
//!
//! ```
//! use bumpalo::Bump;
//! use polynum::{ConstraintId, TypeRegistry};
//!
//! let arena = Bump::new();
//! let registry = TypeRegistry::new(&arena);
//! let floint = registry.define("Floint", registry.float64()).unwrap();
//! let point = registry.define("Point", registry.int64()).unwrap();
//!
//! assert!(registry.check(floint, ConstraintId::Number).is_ok());
//! assert!(registry.check(point, ConstraintId::Number).is_err());
//! ```
//!
//! The same rule holds for Rust types declared with [`numeric_newtype!`]:
//!
//! ```
//! use polynum::{generic::min, numeric_newtype};
//!
//! numeric_newtype! {
//!     pub struct Seconds(f64): Float, Ordered, Number;
//! }
//!
//! assert_eq!(min(Seconds(3.0), Seconds(1.0)), Seconds(1.0));
//! ```

// Re-export the strategies
pub use polynum_core::dispatch::{
    AssertionPolicy, DispatchError, Strategy, add_float32, add_int, add_int64, add_interface,
    add_interface_with, add_numbers, add_reflection, add_values,
};

// Re-export constraint traits and values
pub use polynum_core::constraints::{
    Float, Integer, Number, Numeric, Ordered, Signed, Underlying, Unsigned,
};
pub use polynum_core::values::{self, Bridge, Value, ValueError};
pub use polynum_core::{generic, harness, numeric_newtype};

// Re-export the constraint catalogue
pub use polynum_types::{Constraint, ConstraintId, Kind, KindSet, Ty, TypeError, TypeRegistry};
