//! Addition through dynamic type assertions.
//!
//! The first operand's concrete type is discovered by trying downcasts in
//! turn; the second operand is then downcast to that same type. Only the
//! predeclared types take part: a named type such as
//! [`Floint`](crate::generic::Floint) is not an `f64` and is unsupported.

use core::any::Any;

use tracing::trace;

use crate::constraints::Numeric;
use crate::dispatch::DispatchError;
use crate::values::Value;

/// What to do when the second operand does not have the first operand's
/// type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssertionPolicy {
    /// Return `None`, the same as for any other unsupported input.
    #[default]
    Checked,

    /// Assume the operands match, as the unchecked assertion does, and
    /// report the failed assertion as [`DispatchError::AssertionFailed`].
    Strict,
}

/// Returns the sum of two numbers, or `None` if the first operand's type is
/// unsupported or the operands' types differ.
///
/// ```
/// use polynum_core::dispatch::add_interface;
/// use polynum_core::values::Value;
///
/// assert_eq!(add_interface(&4isize, &6isize), Some(Value::from(10isize)));
/// assert_eq!(add_interface(&5i64, &8i32), None);
/// assert_eq!(add_interface(&"a", &"b"), None);
/// ```
pub fn add_interface(m: &dyn Any, n: &dyn Any) -> Option<Value> {
    add_interface_with(AssertionPolicy::Checked, m, n)
        .ok()
        .flatten()
}

/// Like [`add_interface`], with an explicit [`AssertionPolicy`].
///
/// An unsupported first operand is always `Ok(None)`. A second operand of
/// the wrong type is `Ok(None)` under [`AssertionPolicy::Checked`] and an
/// error under [`AssertionPolicy::Strict`].
pub fn add_interface_with(
    policy: AssertionPolicy,
    m: &dyn Any,
    n: &dyn Any,
) -> Result<Option<Value>, DispatchError> {
    if let Some(&m) = m.downcast_ref::<isize>() {
        add_asserted(policy, m, n)
    } else if let Some(&m) = m.downcast_ref::<i64>() {
        add_asserted(policy, m, n)
    } else if let Some(&m) = m.downcast_ref::<f32>() {
        add_asserted(policy, m, n)
    } else if let Some(&m) = m.downcast_ref::<f64>() {
        add_asserted(policy, m, n)
    } else {
        trace!("first operand has an unsupported type");
        Ok(None)
    }
}

fn add_asserted<T: Numeric + 'static>(
    policy: AssertionPolicy,
    m: T,
    n: &dyn Any,
) -> Result<Option<Value>, DispatchError> {
    match n.downcast_ref::<T>() {
        Some(&n) => Ok(Some(m.wrapping_add(n).into_value())),
        None => match policy {
            AssertionPolicy::Checked => {
                trace!(expected = %T::KIND, "second operand has a different type");
                Ok(None)
            }
            AssertionPolicy::Strict => Err(DispatchError::AssertionFailed { expected: T::KIND }),
        },
    }
}
