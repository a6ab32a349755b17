use super::AbsRat;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Integer displacement between two pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    #[inline]
    pub fn chessboard(self, other: Point) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    /// True when `other` lies in the 8-neighbourhood of `self` (or on it).
    #[inline]
    pub fn is_connected_to(self, other: Point) -> bool {
        (other.x - self.x).abs() <= 1 && (other.y - self.y).abs() <= 1
    }

    #[inline]
    pub fn vector_to(self, other: Point) -> Vector {
        Vector::new(other.x - self.x, other.y - self.y)
    }

    /// Step pattern of the digital segment from `self` to `other`.
    ///
    /// The pattern has one entry per move along the major axis; `true` marks
    /// the moves that also advance along the minor axis. The rounding offset
    /// depends on the travel direction so that `p.steps_to(q)` and
    /// `q.steps_to(p)` draw the same pixels.
    pub fn steps_to(self, other: Point) -> Vec<bool> {
        let negx = other.x < self.x;
        let negy = other.y < self.y;
        let adx = (other.x - self.x).abs() as i64;
        let ady = (other.y - self.y).abs() as i64;
        let (major, minor) = if ady > adx { (ady, adx) } else { (adx, ady) };
        let mut e = major - 1;
        if ady > adx {
            if negx == negy {
                e += 1;
            }
        } else if negx != negy {
            e += 1;
        }
        let (dmaj, dmin) = (2 * major, 2 * minor);
        let mut steps = Vec::with_capacity(major as usize);
        for _ in 0..major {
            e -= dmin;
            if e < 0 {
                e += dmaj;
                steps.push(true);
            } else {
                steps.push(false);
            }
        }
        steps
    }

    /// All pixels of the digital segment from `self` to `other`, both ends
    /// included, in travel order.
    pub fn draw_to(self, other: Point) -> Vec<Point> {
        let steps = self.steps_to(other);
        let sx = (other.x - self.x).signum();
        let sy = (other.y - self.y).signum();
        let x_major = (other.x - self.x).abs() >= (other.y - self.y).abs();
        let mut pts = Vec::with_capacity(steps.len() + 1);
        let mut cur = self;
        pts.push(cur);
        for step in steps {
            if x_major {
                cur.x += sx;
                if step {
                    cur.y += sy;
                }
            } else {
                cur.y += sy;
                if step {
                    cur.x += sx;
                }
            }
            pts.push(cur);
        }
        pts
    }

    /// Smallest of the vertical and horizontal gaps between the middle point
    /// of the triangle `(self, p1, p2)` and the chord joining the two others.
    pub fn triangle_height(self, p1: Point, p2: Point) -> AbsRat {
        let vertical = vertical_gap([self, p1, p2]);
        let horizontal = horizontal_gap([self, p1, p2]);
        if vertical.less_than(&horizontal) {
            vertical
        } else {
            horizontal
        }
    }
}

fn vertical_gap(mut pts: [Point; 3]) -> AbsRat {
    pts.sort_by_key(|p| p.x);
    let [a, b, c] = pts;
    AbsRat::new(a.vector_to(b).cross(a.vector_to(c)), (c.x - a.x) as i64)
}

fn horizontal_gap(mut pts: [Point; 3]) -> AbsRat {
    pts.sort_by_key(|p| p.y);
    let [a, b, c] = pts;
    AbsRat::new(a.vector_to(b).cross(a.vector_to(c)), (c.y - a.y) as i64)
}

/// Axis-aligned pixel bounds, all inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl BoundingBox {
    /// Bounds of a point run, `None` when empty.
    pub fn of<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut bb = BoundingBox {
            xmin: first.x,
            ymin: first.y,
            xmax: first.x,
            ymax: first.y,
        };
        for p in it {
            bb.xmin = bb.xmin.min(p.x);
            bb.ymin = bb.ymin.min(p.y);
            bb.xmax = bb.xmax.max(p.x);
            bb.ymax = bb.ymax.max(p.y);
        }
        Some(bb)
    }

    pub fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> i32 {
        self.ymax - self.ymin
    }
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.x == 0 && self.y == 0
    }

    #[inline]
    pub fn norm2(self) -> i64 {
        let (x, y) = (self.x as i64, self.y as i64);
        x * x + y * y
    }

    #[inline]
    pub fn dot(self, other: Vector) -> i64 {
        self.x as i64 * other.x as i64 + self.y as i64 * other.y as i64
    }

    /// z component of `self × other`.
    #[inline]
    pub fn cross(self, other: Vector) -> i64 {
        self.x as i64 * other.y as i64 - self.y as i64 * other.x as i64
    }

    #[inline]
    pub fn chessboard(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    #[inline]
    pub fn manhattan(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// Quarter turn: `(-y, x)`.
    #[inline]
    pub fn orthog(self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    /// Non-negative dot product with `reference`.
    #[inline]
    pub fn is_directed_as(self, reference: Vector) -> bool {
        self.dot(reference) >= 0
    }

    /// True when the two directions (either sense) are less than 30° apart.
    pub fn is_oriented_as(self, reference: Vector) -> bool {
        let d = self.dot(reference) as i128;
        4 * d * d > 3 * self.norm2() as i128 * reference.norm2() as i128
    }

    /// Squared cosine test `(self·other)² < num/den · |self|²|other|²`.
    pub fn squared_cosine_below(self, other: Vector, num: i64, den: i64) -> bool {
        let d = self.dot(other) as i128;
        den as i128 * d * d < num as i128 * self.norm2() as i128 * other.norm2() as i128
    }

    /// Step pattern of the digital segment from the origin to `self`.
    pub fn steps(self) -> Vec<bool> {
        Point::new(0, 0).steps_to(Point::new(self.x, self.y))
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        other.vector_to(self)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
