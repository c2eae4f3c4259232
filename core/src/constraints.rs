//! Rust traits corresponding to the predeclared constraint sets.
//!
//! Each trait mirrors a [`ConstraintId`] and is implemented for exactly the
//! primitives that constraint admits. Every implementation is checked at
//! compile time against the `polynum-types` table, so the traits and the
//! table cannot drift apart.
//!
//! # Hierarchy
//!
//! ```text
//! Numeric (Copy + ordering + arithmetic + Bridge)
//! ├── Signed     isize, i8, i16, i32, i64
//! ├── Unsigned   usize, u8, u16, u32, u64
//! ├── Integer    Signed | Unsigned
//! ├── Float      f32, f64
//! └── Number     isize, i64, f32, ~f64
//! Ordered (PartialOrd): Integer | Float | String
//! ```
//!
//! Rust has no structural "underlying type" matching, so distinct named
//! types opt in explicitly through [`numeric_newtype!`](crate::numeric_newtype),
//! which verifies each claim against
//! [`ConstraintId::admits_underlying`].

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

use static_assertions::const_assert;

use crate::types::ConstraintId;
use crate::values::Bridge;

/// Base trait for arithmetic operands.
pub trait Numeric:
    Copy
    + PartialOrd
    + Debug
    + Bridge
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Addition that wraps around on integer overflow. Float addition never
    /// overflows and is plain `+`.
    fn wrapping_add(self, rhs: Self) -> Self;
}

/// Types supporting `<`, `<=`, `>`, `>=`.
pub trait Ordered: PartialOrd {}

pub trait Signed: Numeric {}

pub trait Unsigned: Numeric {}

pub trait Integer: Numeric {}

pub trait Float: Numeric {}

/// `int | int64 | float32 | ~float64`
///
/// Implemented for `isize`, `i64`, `f32` and `f64`, and for named types
/// over `f64` only.
pub trait Number: Numeric {}

/// A distinct named type and its underlying representation.
pub trait Underlying: Copy {
    type Repr: Numeric;

    fn into_repr(self) -> Self::Repr;

    fn from_repr(repr: Self::Repr) -> Self;
}

macro_rules! impl_numeric {
    (integer: $($ty:ty),+ $(,)?) => {$(
        impl Numeric for $ty {
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }
        }
    )+};
    (float: $($ty:ty),+ $(,)?) => {$(
        impl Numeric for $ty {
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }
        }
    )+};
}

macro_rules! impl_constraint {
    ($class:ident: $($ty:ty),+ $(,)?) => {$(
        const_assert!(ConstraintId::$class.admits(<$ty as Bridge>::KIND));
        impl $class for $ty {}
    )+};
}

impl_numeric!(integer: isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
impl_numeric!(float: f32, f64);

impl_constraint!(Signed: isize, i8, i16, i32, i64);
impl_constraint!(Unsigned: usize, u8, u16, u32, u64);
impl_constraint!(Integer: isize, i8, i16, i32, i64, usize, u8, u16, u32, u64);
impl_constraint!(Float: f32, f64);
impl_constraint!(Ordered: isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64, String);
impl_constraint!(Number: isize, i64, f32, f64);
