//! One function per concrete type.
//!
//! No dispatch cost and no flexibility: the caller picks the function, and
//! the signature forbids mismatched operands. Integer sums wrap on overflow.
//!
//! ```compile_fail
//! use polynum_core::dispatch::add_int64;
//!
//! add_int64(5i64, 8i32);
//! ```

pub fn add_int(m: isize, n: isize) -> isize {
    m.wrapping_add(n)
}

pub fn add_int64(m: i64, n: i64) -> i64 {
    m.wrapping_add(n)
}

pub fn add_float32(m: f32, n: f32) -> f32 {
    m + n
}
