use super::{ceil_div, floor_div};
use crate::geometry::{AbsRat, Point, Vector};
use serde::{Deserialize, Serialize};

/// Arithmetic thickness used when a line is built from two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// `nu = 1`: only the pixels crossed by the leaning line.
    Thin,
    /// `nu = period`: 8-connected line.
    Naive,
    /// `nu = |a| + |b|`: 4-connected line.
    Standard,
}

/// Digital straight line `c <= a*x + b*y < c + nu`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitalStraightLine {
    a: i32,
    b: i32,
    c: i32,
    nu: i32,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Reduced normal of the direction `d`, with `a >= 0` and `b > 0` when `a == 0`.
fn normal_of(d: Vector) -> (i32, i32) {
    let (mut a, mut b) = (d.y as i64, -(d.x as i64));
    if a == 0 && b == 0 {
        return (1, 0);
    }
    let g = gcd(a, b);
    a /= g;
    b /= g;
    if a < 0 || (a == 0 && b < 0) {
        a = -a;
        b = -b;
    }
    (a as i32, b as i32)
}

impl DigitalStraightLine {
    /// Builds the line from raw coefficients. A normal pointing the wrong way
    /// is flipped together with the strip bounds, which keeps the same pixels.
    pub fn new(a: i32, b: i32, c: i32, nu: i32) -> Self {
        let nu = nu.max(1);
        if a < 0 || (a == 0 && b < 0) {
            Self {
                a: -a,
                b: -b,
                c: -(c + nu - 1),
                nu,
            }
        } else {
            Self { a, b, c, nu }
        }
    }

    /// Line through `p1` and `p2` with the given arithmetic thickness; both
    /// points satisfy the lower bound `a*x + b*y == c`.
    pub fn through(p1: Point, p2: Point, kind: LineKind) -> Self {
        let (a, b) = normal_of(p1.vector_to(p2));
        let c = (a as i64 * p1.x as i64 + b as i64 * p1.y as i64) as i32;
        let nu = match kind {
            LineKind::Thin => 1,
            LineKind::Naive => a.abs().max(b.abs()),
            LineKind::Standard => a.abs() + b.abs(),
        };
        Self { a, b, c, nu }
    }

    /// Thinnest line parallel to the edge `(s, e)` that contains `v`.
    pub fn from_antipodal(s: Point, e: Point, v: Point) -> Self {
        let (a, b) = normal_of(s.vector_to(e));
        let vs = a as i64 * s.x as i64 + b as i64 * s.y as i64;
        let vv = a as i64 * v.x as i64 + b as i64 * v.y as i64;
        Self {
            a,
            b,
            c: vs.min(vv) as i32,
            nu: ((vv - vs).abs() + 1) as i32,
        }
    }

    #[inline]
    pub fn a(&self) -> i32 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> i32 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> i32 {
        self.c
    }

    #[inline]
    pub fn nu(&self) -> i32 {
        self.nu
    }

    /// Naive thickness unit `max(|a|, |b|)`.
    #[inline]
    pub fn period(&self) -> i32 {
        self.a.abs().max(self.b.abs())
    }

    #[inline]
    pub fn antiperiod(&self) -> i32 {
        self.a.abs().min(self.b.abs())
    }

    /// Standard thickness unit `|a| + |b|`.
    #[inline]
    pub fn standard(&self) -> i32 {
        self.a.abs() + self.b.abs()
    }

    /// Width measured along the closest axis, `nu / period`.
    pub fn width(&self) -> AbsRat {
        AbsRat::new(self.nu as i64, self.period() as i64)
    }

    /// Squared euclidean width `nu² / (a² + b²)`.
    pub fn squared_euclidean_thickness(&self) -> AbsRat {
        let nu = self.nu as i64;
        AbsRat::new(nu * nu, self.normal().norm2())
    }

    #[inline]
    pub fn normal(&self) -> Vector {
        Vector::new(self.a, self.b)
    }

    /// Direction vector `(-b, a)`.
    #[inline]
    pub fn support_vector(&self) -> Vector {
        Vector::new(-self.b, self.a)
    }

    /// Naive line through the middle of the strip.
    pub fn medial_axis(&self) -> DigitalStraightLine {
        Self {
            a: self.a,
            b: self.b,
            c: self.c + self.nu / 2,
            nu: self.period(),
        }
    }

    /// `a*x + b*y - c`.
    #[inline]
    pub fn remainder(&self, p: Point) -> i64 {
        self.a as i64 * p.x as i64 + self.b as i64 * p.y as i64 - self.c as i64
    }

    #[inline]
    pub fn owns(&self, p: Point) -> bool {
        let r = self.remainder(p);
        r >= 0 && r < self.nu as i64
    }

    /// True when both ends belong to the line.
    pub fn owns_segment(&self, p1: Point, p2: Point) -> bool {
        self.owns(p1) && self.owns(p2)
    }

    /// True when the segment `p1 p2` meets the strip, even partially.
    pub fn crosses(&self, p1: Point, p2: Point) -> bool {
        let (r1, r2) = (self.remainder(p1), self.remainder(p2));
        let nu = self.nu as i64;
        !(r1 < 0 && r2 < 0) && !(r1 >= nu && r2 >= nu)
    }

    /// Signed index of the parallel strip of width `nu` holding `p`;
    /// zero for owned points.
    pub fn side_shift(&self, p: Point) -> i64 {
        floor_div(self.remainder(p), self.nu as i64)
    }

    /// Signed lateral distance of `p` to the strip, in periods; zero inside.
    pub fn manhattan(&self, p: Point) -> i32 {
        let r = self.remainder(p);
        let period = self.period() as i64;
        let nu = self.nu as i64;
        let d = if r < 0 {
            -ceil_div(-r, period)
        } else if r >= nu {
            (r - nu) / period + 1
        } else {
            0
        };
        d as i32
    }

    /// Pixel of the segment `p1 p2` closest to the medial axis, `None` when
    /// the segment is parallel to the line.
    pub fn center_of_intersection(&self, p1: Point, p2: Point) -> Option<Point> {
        let d = p1.vector_to(p2);
        let den = self.a as i64 * d.x as i64 + self.b as i64 * d.y as i64;
        if den == 0 {
            return None;
        }
        let vp1 = self.a as i64 * p1.x as i64 + self.b as i64 * p1.y as i64;
        // Strip centre is c + (nu - 1) / 2; t = num / (2 den).
        let num = 2 * self.c as i64 + self.nu as i64 - 1 - 2 * vp1;
        let x = p1.x as i64 + round_div(num * d.x as i64, 2 * den);
        let y = p1.y as i64 + round_div(num * d.y as i64, 2 * den);
        Some(Point::new(x as i32, y as i32))
    }
}

/// Nearest integer to `n / d`, halves rounded up.
fn round_div(n: i64, d: i64) -> i64 {
    let (n, d) = if d < 0 { (-n, -d) } else { (n, d) };
    floor_div(2 * n + d, 2 * d)
}
