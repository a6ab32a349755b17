use crate::geometry::{AbsRat, BoundingBox, Point};
use std::collections::VecDeque;

/// Point history of a growing segment, split at its seed.
///
/// Points added on the left go to the front, points added on the right go to
/// the back, so the list always reads in left to right order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiPtList {
    pts: VecDeque<Point>,
    start: usize,
}

impl BiPtList {
    pub fn new(seed: Point) -> Self {
        let mut pts = VecDeque::with_capacity(64);
        pts.push_back(seed);
        Self { pts, start: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Never true: the seed is kept whatever gets removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Number of points on the left of the seed.
    #[inline]
    pub fn front_len(&self) -> usize {
        self.start
    }

    /// Number of points on the right of the seed.
    #[inline]
    pub fn back_len(&self) -> usize {
        self.pts.len() - self.start - 1
    }

    pub fn seed(&self) -> Point {
        self.pts[self.start]
    }

    /// Leftmost point.
    pub fn front(&self) -> Point {
        self.pts[0]
    }

    /// Rightmost point.
    pub fn back(&self) -> Point {
        self.pts[self.pts.len() - 1]
    }

    pub fn add_front(&mut self, p: Point) {
        self.pts.push_front(p);
        self.start += 1;
    }

    pub fn add_back(&mut self, p: Point) {
        self.pts.push_back(p);
    }

    /// Drops up to `n` points from the left end. The point next to the seed
    /// is never removed this way.
    pub fn remove_front(&mut self, n: usize) {
        let n = n.min(self.start.saturating_sub(1));
        self.pts.drain(..n);
        self.start -= n;
    }

    /// Drops up to `n` points from the right end, sparing the one next to
    /// the seed.
    pub fn remove_back(&mut self, n: usize) {
        let n = n.min(self.back_len().saturating_sub(1));
        let keep = self.pts.len() - n;
        self.pts.truncate(keep);
    }

    /// Rational height of `p` above the chord joining both ends.
    pub fn height_to_ends(&self, p: Point) -> AbsRat {
        p.triangle_height(self.front(), self.back())
    }

    pub fn extrema(&self) -> BoundingBox {
        BoundingBox::of(self.pts.iter()).unwrap_or(BoundingBox {
            xmin: 0,
            ymin: 0,
            xmax: 0,
            ymax: 0,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.pts.iter()
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.pts.iter().copied().collect()
    }

    /// Left side points, from the seed outwards.
    pub fn left_points(&self) -> Vec<Point> {
        self.pts.iter().take(self.start).rev().copied().collect()
    }

    /// Right side points, from the seed outwards.
    pub fn right_points(&self) -> Vec<Point> {
        self.pts.iter().skip(self.start + 1).copied().collect()
    }
}
