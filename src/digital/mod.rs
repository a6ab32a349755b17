//! Arithmetic digital straight lines and segments.
//!
//! A line is the set of pixels `(x, y)` with `c <= a*x + b*y < c + nu`. The
//! normal `(a, b)` is kept reduced by its gcd and normalised so that `a >= 0`
//! (and `b > 0` when `a == 0`); `period = max(|a|, |b|)` gives the naive
//! thickness unit, so `nu / period` is the width along the closest axis.

mod line;
mod segment;

pub use line::{DigitalStraightLine, LineKind};
pub use segment::DigitalStraightSegment;

/// Floor of `n / d` for `d > 0`.
#[inline]
pub(crate) fn floor_div(n: i64, d: i64) -> i64 {
    n.div_euclid(d)
}

/// Ceiling of `n / d` for `d > 0`.
#[inline]
pub(crate) fn ceil_div(n: i64, d: i64) -> i64 {
    -(-n).div_euclid(d)
}
