//! Branch-free comparisons over 8-bit values.
//!
//! Every function takes operands in `0..=255` widened to `u32` and returns
//! `0xFF` when the relation holds and `0x00` otherwise. Results come from
//! wrapping subtraction and a logical shift: a difference that underflows
//! sets the bits above the low byte, which the `>> 8` moves down into the
//! mask. No comparison operator is used, so the compiler has nothing to
//! turn into a data-dependent branch.

/// `0xFF` if `x == y`, else `0`.
#[inline(always)]
pub(crate) const fn ct_eq(x: u32, y: u32) -> u32 {
    ((0u32.wrapping_sub(x ^ y) >> 8) & 0xFF) ^ 0xFF
}

/// `0xFF` if `x > y`, else `0`.
#[inline(always)]
pub(crate) const fn ct_gt(x: u32, y: u32) -> u32 {
    (y.wrapping_sub(x) >> 8) & 0xFF
}

/// `0xFF` if `x >= y`, else `0`.
#[inline(always)]
pub(crate) const fn ct_ge(x: u32, y: u32) -> u32 {
    ct_gt(y, x) ^ 0xFF
}

/// `0xFF` if `x < y`, else `0`.
#[inline(always)]
pub(crate) const fn ct_lt(x: u32, y: u32) -> u32 {
    ct_gt(y, x)
}

/// `0xFF` if `x <= y`, else `0`.
#[inline(always)]
pub(crate) const fn ct_le(x: u32, y: u32) -> u32 {
    ct_ge(y, x)
}
