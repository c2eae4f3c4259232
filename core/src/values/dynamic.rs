//! Runtime-tagged values.
//!
//! A [`Value`] pairs an explicit [`Kind`] discriminant with widened storage:
//! every signed kind is stored as `i64`, every unsigned kind as `u64`, and
//! both float kinds as `f64`. Narrowing happens once, on construction, so a
//! stored value always fits its kind.

use core::fmt;

use crate::types::Kind;
use crate::values::error::ValueError;
use crate::values::typed::Bridge;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum RawValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    kind: Kind,
    // Keep this private: constructors narrow into the kind's width and the
    // accessors rely on `raw` agreeing with `kind`.
    raw: RawValue,
}

impl Value {
    pub(crate) const fn from_raw_parts(kind: Kind, raw: RawValue) -> Self {
        Self { kind, raw }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    pub fn bool(value: bool) -> Self {
        Self::from_raw_parts(Kind::Bool, RawValue::Bool(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::from_raw_parts(Kind::String, RawValue::Str(value.into()))
    }

    /// Builds a signed integer value of `kind`, truncating `value` to the
    /// kind's width.
    pub fn from_int(kind: Kind, value: i64) -> Result<Self, ValueError> {
        let narrowed = match kind {
            Kind::Int => value as isize as i64,
            Kind::Int8 => value as i8 as i64,
            Kind::Int16 => value as i16 as i64,
            Kind::Int32 => value as i32 as i64,
            Kind::Int64 => value,
            found => {
                return Err(ValueError::NotA {
                    expected: "signed integer",
                    found,
                });
            }
        };
        Ok(Self::from_raw_parts(kind, RawValue::Int(narrowed)))
    }

    /// Builds an unsigned integer value of `kind`, truncating `value` to the
    /// kind's width.
    pub fn from_uint(kind: Kind, value: u64) -> Result<Self, ValueError> {
        let narrowed = match kind {
            Kind::Uint | Kind::Uintptr => value as usize as u64,
            Kind::Uint8 => value as u8 as u64,
            Kind::Uint16 => value as u16 as u64,
            Kind::Uint32 => value as u32 as u64,
            Kind::Uint64 => value,
            found => {
                return Err(ValueError::NotA {
                    expected: "unsigned integer",
                    found,
                });
            }
        };
        Ok(Self::from_raw_parts(kind, RawValue::Uint(narrowed)))
    }

    /// Builds a float value of `kind`, rounding `value` to single precision
    /// for `Float32`.
    pub fn from_float(kind: Kind, value: f64) -> Result<Self, ValueError> {
        let narrowed = match kind {
            Kind::Float32 => value as f32 as f64,
            Kind::Float64 => value,
            found => {
                return Err(ValueError::NotA {
                    expected: "float",
                    found,
                });
            }
        };
        Ok(Self::from_raw_parts(kind, RawValue::Float(narrowed)))
    }

    // ========================================================================
    // Widened extractors
    // ========================================================================

    /// Returns a signed integer of any width, widened to `i64`.
    pub fn int(&self) -> Result<i64, ValueError> {
        match self.raw {
            RawValue::Int(value) => Ok(value),
            _ => Err(self.not_a("signed integer")),
        }
    }

    /// Returns an unsigned integer of any width, widened to `u64`.
    pub fn uint(&self) -> Result<u64, ValueError> {
        match self.raw {
            RawValue::Uint(value) => Ok(value),
            _ => Err(self.not_a("unsigned integer")),
        }
    }

    /// Returns a float of either width, widened to `f64`.
    pub fn float(&self) -> Result<f64, ValueError> {
        match self.raw {
            RawValue::Float(value) => Ok(value),
            _ => Err(self.not_a("float")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self.raw {
            RawValue::Bool(value) => Ok(value),
            _ => Err(self.not_a("bool")),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match &self.raw {
            RawValue::Str(value) => Ok(value),
            _ => Err(self.not_a("string")),
        }
    }

    /// Extracts a statically typed value. The kind must match exactly.
    pub fn get<T: Bridge>(&self) -> Result<T, ValueError> {
        T::from_value(self)
    }

    fn not_a(&self, expected: &'static str) -> ValueError {
        ValueError::NotA {
            expected,
            found: self.kind,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            RawValue::Bool(value) => write!(f, "{value}"),
            RawValue::Int(value) => write!(f, "{value}"),
            RawValue::Uint(value) => write!(f, "{value}"),
            RawValue::Float(value) if self.kind == Kind::Float32 => write!(f, "{}", *value as f32),
            RawValue::Float(value) => write!(f, "{value}"),
            RawValue::Str(value) => f.write_str(value),
        }
    }
}
