use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact non-negative fraction `num / den`.
///
/// Both terms are stored as absolute values. A zero denominator marks an
/// undefined (unbounded) value: it compares greater than any defined fraction
/// with a non-zero numerator and must not be turned into a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsRat {
    num: i64,
    den: i64,
}

impl AbsRat {
    /// Unbounded sentinel (`1 / 0`).
    pub const UNDEFINED: AbsRat = AbsRat { num: 1, den: 0 };
    pub const ZERO: AbsRat = AbsRat { num: 0, den: 1 };

    pub fn new(num: i64, den: i64) -> Self {
        Self {
            num: num.abs(),
            den: den.abs(),
        }
    }

    pub fn from_int(value: i64) -> Self {
        Self::new(value, 1)
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.num
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.den
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.den != 0
    }

    #[inline]
    fn cross(&self, other: &AbsRat) -> (i128, i128) {
        (
            self.num as i128 * other.den as i128,
            self.den as i128 * other.num as i128,
        )
    }

    pub fn less_than(&self, other: &AbsRat) -> bool {
        let (l, r) = self.cross(other);
        l < r
    }

    pub fn less_eq(&self, other: &AbsRat) -> bool {
        let (l, r) = self.cross(other);
        l <= r
    }

    pub fn greater_than(&self, other: &AbsRat) -> bool {
        let (l, r) = self.cross(other);
        l > r
    }

    pub fn greater_eq(&self, other: &AbsRat) -> bool {
        let (l, r) = self.cross(other);
        l >= r
    }

    pub fn equals(&self, other: &AbsRat) -> bool {
        let (l, r) = self.cross(other);
        l == r
    }

    /// Integer part, `None` when undefined.
    pub fn floor(&self) -> Option<i64> {
        (self.den != 0).then(|| self.num / self.den)
    }

    /// Adds one half, keeping the denominator as small as possible.
    pub fn sum_half(&self) -> AbsRat {
        if self.den % 2 == 1 {
            AbsRat::new(2 * self.num + self.den, 2 * self.den)
        } else {
            AbsRat::new(self.num + self.den / 2, self.den)
        }
    }

    /// Adds an integer value.
    pub fn sum(&self, value: i64) -> AbsRat {
        AbsRat::new(self.num + value * self.den, self.den)
    }

    /// Continuous value for reporting; infinite when undefined.
    pub fn to_f64(&self) -> f64 {
        if self.den == 0 {
            f64::INFINITY
        } else {
            self.num as f64 / self.den as f64
        }
    }
}

impl fmt::Display for AbsRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
