//! Small generic utilities and their one-function-per-type counterparts.

use core::fmt::Debug;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::constraints::Number;
use crate::numeric_newtype;
use crate::values::Value;

numeric_newtype! {
    /// A `float64` under another name.
    ///
    /// `Number` approximates `float64`, so `Floint` satisfies it.
    pub struct Floint(f64): Float, Ordered, Number;
}

numeric_newtype! {
    /// An `int64` under another name.
    ///
    /// `Number` lists `int64` exactly, so `Point` does not satisfy it:
    ///
    /// ```compile_fail
    /// use polynum_core::generic::{min, Point};
    ///
    /// min(Point(4), Point(9));
    /// ```
    pub struct Point(i64): Signed, Integer, Ordered;
}

// ============================================================================
// Reverse
// ============================================================================

pub fn reverse_int(nums: &[isize]) -> Vec<isize> {
    nums.iter().rev().copied().collect()
}

pub fn reverse_string(words: &[String]) -> Vec<String> {
    words.iter().rev().cloned().collect()
}

/// Reverses a heterogeneous list.
pub fn reverse_values(anything: &[Value]) -> Vec<Value> {
    anything.iter().rev().cloned().collect()
}

/// Returns a new list with the elements of `list` in reverse order.
///
/// ```
/// use polynum_core::generic::reverse;
///
/// assert_eq!(reverse(&[1, 2, 3, 4]), vec![4, 3, 2, 1]);
/// assert_eq!(reverse::<&str>(&["hello", "my", "friend"]), vec!["friend", "my", "hello"]);
/// ```
pub fn reverse<T: Clone>(list: &[T]) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

// ============================================================================
// Lookup
// ============================================================================

/// Returns whether any element of `list` equals `target`.
pub fn contains<T: PartialEq>(list: &[T], target: &T) -> bool {
    list.iter().any(|elem| elem == target)
}

/// Returns the keys of `map`, in the map's iteration order.
pub fn keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    let mut result = Vec::with_capacity(map.len());
    result.extend(map.keys().cloned());
    result
}

/// Returns `x` if it is strictly less than `y`, otherwise `y`.
///
/// ```
/// use polynum_core::generic::{min, Floint};
///
/// assert_eq!(min(4isize, 9), 4);
/// assert_eq!(min(Floint(4.0), Floint(9.0)), Floint(4.0));
/// ```
pub fn min<T: Number>(x: T, y: T) -> T {
    if x < y { x } else { y }
}

// ============================================================================
// Type parameters vs regular arguments
// ============================================================================

/// Formats three arguments that may each have a different type.
pub fn describe_any(a: &dyn Debug, b: &dyn Debug, c: &dyn Debug) -> String {
    format!("{a:?} {b:?} {c:?}")
}

/// Formats three arguments of one type.
///
/// ```compile_fail
/// use polynum_core::generic::describe_same;
///
/// describe_same(12, "abc", ());
/// ```
pub fn describe_same<T: Debug>(a: T, b: T, c: T) -> String {
    format!("{a:?} {b:?} {c:?}")
}

#[cfg(test)]
#[path = "generic_test.rs"]
mod generic_test;
