//! Addition through runtime kind inspection.
//!
//! Each operand is converted to a [`Value`] and inspected independently.
//! Integer kinds are summed as `i64` and float kinds as `f64`; the sum is
//! then narrowed back for `Int` and `Float32`. Named types reflect as their
//! underlying kind, so `Floint` operands are summed like `f64` and the result
//! is a plain `float64` value.

use tracing::trace;

use crate::types::Kind;
use crate::values::Value;

/// Returns the sum of two numbers, or `None` if their kinds differ or are
/// not one of `int`, `int64`, `float32`, `float64`.
///
/// ```
/// use polynum_core::dispatch::add_reflection;
/// use polynum_core::values::Value;
///
/// assert_eq!(add_reflection(4isize, 6isize), Some(Value::from(10isize)));
/// assert_eq!(add_reflection(3i64, 12i64), Some(Value::from(15i64)));
/// assert_eq!(add_reflection(5i64, 8i32), None);
/// ```
pub fn add_reflection(m: impl Into<Value>, n: impl Into<Value>) -> Option<Value> {
    add_values(&m.into(), &n.into())
}

/// [`add_reflection`] on values that are already tagged.
pub fn add_values(m: &Value, n: &Value) -> Option<Value> {
    let kind = m.kind();
    if kind != n.kind() {
        trace!(left = %kind, right = %n.kind(), "operand kinds differ");
        return None;
    }

    match kind {
        Kind::Int | Kind::Int64 => {
            let sum = m.int().ok()?.wrapping_add(n.int().ok()?);
            Value::from_int(kind, sum).ok()
        }
        Kind::Float32 | Kind::Float64 => {
            let sum = m.float().ok()? + n.float().ok()?;
            Value::from_float(kind, sum).ok()
        }
        _ => {
            trace!(%kind, "unsupported operand kind");
            None
        }
    }
}
