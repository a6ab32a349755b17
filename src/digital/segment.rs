use super::{ceil_div, floor_div, DigitalStraightLine, LineKind};
use crate::geometry::{AbsRat, BoundingBox, Point, Vector};
use serde::{Deserialize, Serialize};

/// Digital straight line restricted to a coordinate interval.
///
/// Mostly horizontal lines (`|b| > a`) are bounded on `x`, the others on `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalStraightSegment {
    line: DigitalStraightLine,
    min: i32,
    max: i32,
}

impl DigitalStraightSegment {
    /// Wraps `line`, taking the bounds from the relevant axis of `bbox`.
    pub fn new(line: DigitalStraightLine, bbox: BoundingBox) -> Self {
        let (min, max) = if Self::bounded_on_x(&line) {
            (bbox.xmin, bbox.xmax)
        } else {
            (bbox.ymin, bbox.ymax)
        };
        Self { line, min, max }
    }

    /// Segment of the line through `p1` and `p2`, bounded by `bbox`.
    pub fn through(p1: Point, p2: Point, kind: LineKind, bbox: BoundingBox) -> Self {
        Self::new(DigitalStraightLine::through(p1, p2, kind), bbox)
    }

    /// Segment of the thinnest line parallel to `(s, e)` holding `v`.
    pub fn from_antipodal(s: Point, e: Point, v: Point, bbox: BoundingBox) -> Self {
        Self::new(DigitalStraightLine::from_antipodal(s, e, v), bbox)
    }

    fn bounded_on_x(line: &DigitalStraightLine) -> bool {
        line.b().abs() > line.a()
    }

    #[inline]
    pub fn line(&self) -> &DigitalStraightLine {
        &self.line
    }

    #[inline]
    pub fn is_bounded_on_x(&self) -> bool {
        Self::bounded_on_x(&self.line)
    }

    /// Inclusive bounds on the bounded axis.
    #[inline]
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    #[inline]
    pub fn period(&self) -> i32 {
        self.line.period()
    }

    #[inline]
    pub fn nu(&self) -> i32 {
        self.line.nu()
    }

    /// Width `nu / period`.
    pub fn width(&self) -> AbsRat {
        self.line.width()
    }

    #[inline]
    pub fn support_vector(&self) -> Vector {
        self.line.support_vector()
    }

    pub fn owns(&self, p: Point) -> bool {
        let t = if self.is_bounded_on_x() { p.x } else { p.y };
        t >= self.min && t <= self.max && self.line.owns(p)
    }

    pub fn manhattan(&self, p: Point) -> i32 {
        self.line.manhattan(p)
    }

    pub fn center_of_intersection(&self, p1: Point, p2: Point) -> Option<Point> {
        self.line.center_of_intersection(p1, p2)
    }

    /// Every pixel of the segment, ordered along the bounded axis.
    pub fn points(&self) -> Vec<Point> {
        let (a, b, c, nu) = (
            self.line.a() as i64,
            self.line.b() as i64,
            self.line.c() as i64,
            self.line.nu() as i64,
        );
        let mut pts = Vec::new();
        if self.is_bounded_on_x() {
            for x in self.min..=self.max {
                let base = a * x as i64;
                let (lo, hi) = if b > 0 {
                    (ceil_div(c - base, b), ceil_div(c + nu - base, b) - 1)
                } else {
                    (
                        floor_div(base - c - nu, -b) + 1,
                        floor_div(base - c, -b),
                    )
                };
                pts.extend((lo..=hi).map(|y| Point::new(x, y as i32)));
            }
        } else {
            for y in self.min..=self.max {
                let base = b * y as i64;
                let lo = ceil_div(c - base, a);
                let hi = ceil_div(c + nu - base, a) - 1;
                pts.extend((lo..=hi).map(|x| Point::new(x as i32, y)));
            }
        }
        pts
    }
}
