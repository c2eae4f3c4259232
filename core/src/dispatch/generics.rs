use crate::constraints::Number;

/// Returns the sum of two numbers of the same type. Integer sums wrap on
/// overflow.
///
/// `T` is fixed at each call site, by inference or explicitly, so there is
/// no runtime branching and no widening.
///
/// ```
/// use polynum_core::dispatch::add_numbers;
///
/// assert_eq!(add_numbers(4isize, 6), 10);
/// assert_eq!(add_numbers::<f32>(7.0, 13.0), 20.0);
/// ```
///
/// Both operands must have the same type:
///
/// ```compile_fail
/// use polynum_core::dispatch::add_numbers;
///
/// add_numbers(5i64, 8i32);
/// ```
///
/// and that type must satisfy `Number`:
///
/// ```compile_fail
/// use polynum_core::dispatch::add_numbers;
///
/// add_numbers(5i32, 8i32);
/// ```
pub fn add_numbers<T: Number>(m: T, n: T) -> T {
    m.wrapping_add(n)
}
