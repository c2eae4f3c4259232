//! Statically typed access to [`Value`].

use crate::types::Kind;
use crate::values::dynamic::{RawValue, Value};
use crate::values::error::ValueError;

/// Conversion between a Rust type and its runtime-tagged [`Value`].
///
/// `KIND` is the representation a value of this type reflects as. Distinct
/// named types (see [`numeric_newtype!`](crate::numeric_newtype)) reflect as
/// their underlying kind.
pub trait Bridge: Sized {
    const KIND: Kind;

    fn into_value(self) -> Value;

    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

fn expect_kind(value: &Value, expected: Kind) -> Result<(), ValueError> {
    if value.kind() == expected {
        Ok(())
    } else {
        Err(ValueError::KindMismatch {
            expected,
            found: value.kind(),
        })
    }
}

macro_rules! bridge_primitive {
    ($($ty:ty => $kind:ident, $raw:ident, $wide:ty, $get:ident;)+) => {$(
        impl Bridge for $ty {
            const KIND: Kind = Kind::$kind;

            fn into_value(self) -> Value {
                Value::from_raw_parts(Kind::$kind, RawValue::$raw(self as $wide))
            }

            fn from_value(value: &Value) -> Result<Self, ValueError> {
                expect_kind(value, Kind::$kind)?;
                Ok(value.$get()? as $ty)
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                value.into_value()
            }
        }
    )+};
}

bridge_primitive! {
    isize => Int, Int, i64, int;
    i8 => Int8, Int, i64, int;
    i16 => Int16, Int, i64, int;
    i32 => Int32, Int, i64, int;
    i64 => Int64, Int, i64, int;
    usize => Uint, Uint, u64, uint;
    u8 => Uint8, Uint, u64, uint;
    u16 => Uint16, Uint, u64, uint;
    u32 => Uint32, Uint, u64, uint;
    u64 => Uint64, Uint, u64, uint;
    f32 => Float32, Float, f64, float;
    f64 => Float64, Float, f64, float;
}

impl Bridge for bool {
    const KIND: Kind = Kind::Bool;

    fn into_value(self) -> Value {
        Value::bool(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_bool()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl Bridge for String {
    const KIND: Kind = Kind::String;

    fn into_value(self) -> Value {
        Value::string(self)
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_str().map(str::to_string)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}
