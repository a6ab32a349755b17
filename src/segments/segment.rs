use super::point_list::BiPtList;
use crate::digital::DigitalStraightSegment;
use crate::geometry::{AbsRat, BoundingBox, Point, Vector};
use nalgebra::Vector3;
use std::cell::OnceCell;

/// Detected blurred segment.
///
/// Holds every accepted pixel in left to right order, the digital straight
/// segment enclosing them and, for non-degenerate runs, the antipodal pair the
/// width was measured on. Continuous quantities are derived lazily from the
/// two end points and only serve reporting.
#[derive(Clone, Debug)]
pub struct BlurredSegment {
    points: BiPtList,
    dss: DigitalStraightSegment,
    antipodal: Option<(Point, Point, Point)>,
    line: OnceCell<Vector3<f64>>,
    direction: OnceCell<[f64; 2]>,
    length: OnceCell<f64>,
}

impl BlurredSegment {
    pub(crate) fn new(
        points: BiPtList,
        dss: DigitalStraightSegment,
        antipodal: Option<(Point, Point, Point)>,
    ) -> Self {
        Self {
            points,
            dss,
            antipodal,
            line: OnceCell::new(),
            direction: OnceCell::new(),
            length: OnceCell::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point_list(&self) -> &BiPtList {
        &self.points
    }

    /// All points, left to right.
    pub fn all_points(&self) -> Vec<Point> {
        self.points.to_vec()
    }

    /// Points on the left of the seed, from the seed outwards.
    pub fn left_points(&self) -> Vec<Point> {
        self.points.left_points()
    }

    /// Points on the right of the seed, from the seed outwards.
    pub fn right_points(&self) -> Vec<Point> {
        self.points.right_points()
    }

    /// Seed the growth started from.
    pub fn center(&self) -> Point {
        self.points.seed()
    }

    pub fn last_left(&self) -> Point {
        self.points.front()
    }

    pub fn last_right(&self) -> Point {
        self.points.back()
    }

    pub fn squared_length(&self) -> i64 {
        self.last_left().vector_to(self.last_right()).norm2()
    }

    pub fn middle(&self) -> Point {
        let (l, r) = (self.last_left(), self.last_right());
        Point::new((l.x + r.x) / 2, (l.y + r.y) / 2)
    }

    pub fn segment(&self) -> &DigitalStraightSegment {
        &self.dss
    }

    pub fn support_vector(&self) -> Vector {
        self.dss.support_vector()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.points.extrema()
    }

    /// Extent of the bounding box, `(xmax - xmin, ymax - ymin)`.
    pub fn bounding_box_size(&self) -> Vector {
        let bb = self.bounding_box();
        Vector::new(bb.width(), bb.height())
    }

    /// Digital width as `nu / period`.
    pub fn minimal_width(&self) -> AbsRat {
        AbsRat::new(self.dss.nu() as i64, self.dss.period() as i64)
    }

    pub fn is_thick(&self) -> bool {
        self.dss.nu() > 1
    }

    /// `(edge start, edge end, vertex)` of the antipodal pair, `None` for
    /// thin runs built without a hull.
    pub fn antipodal(&self) -> Option<(Point, Point, Point)> {
        self.antipodal
    }

    /// Maximal runs of 8-connected consecutive points, singletons included.
    pub fn split_into_runs(&self) -> Vec<Vec<Point>> {
        let mut runs: Vec<Vec<Point>> = Vec::new();
        let mut prev: Option<Point> = None;
        for &p in self.points.iter() {
            match runs.last_mut() {
                Some(run) if prev.is_some_and(|q| q.is_connected_to(p)) => run.push(p),
                _ => runs.push(vec![p]),
            }
            prev = Some(p);
        }
        runs
    }

    /// Runs of at least two connected points.
    pub fn connected_components(&self) -> Vec<Vec<Point>> {
        self.split_into_runs()
            .into_iter()
            .filter(|run| run.len() > 1)
            .collect()
    }

    /// Number of points lying in connected runs of at least `min` points.
    pub fn count_of_connected_points(&self, min: usize) -> usize {
        self.split_into_runs()
            .iter()
            .map(Vec::len)
            .filter(|&n| n > 1 && n >= min)
            .sum()
    }

    /// Number of connected runs of at least `min` points.
    pub fn count_of_connected_components(&self, min: usize) -> usize {
        self.split_into_runs()
            .iter()
            .filter(|run| run.len() > 1 && run.len() >= min)
            .count()
    }

    /// End points in image coordinates, left first.
    pub fn endpoints(&self) -> [[f64; 2]; 2] {
        let (l, r) = (self.last_left(), self.last_right());
        [[l.x as f64, l.y as f64], [r.x as f64, r.y as f64]]
    }

    fn compute_length(&self) -> f64 {
        (self.squared_length() as f64).sqrt()
    }

    pub fn length(&self) -> f64 {
        *self.length.get_or_init(|| self.compute_length())
    }

    fn compute_direction(&self) -> [f64; 2] {
        let len = self.length();
        let [p0, p1] = self.endpoints();
        if len > 0.0 {
            [(p1[0] - p0[0]) / len, (p1[1] - p0[1]) / len]
        } else {
            [0.0, 0.0]
        }
    }

    /// Unit vector from the left end to the right end.
    pub fn direction(&self) -> [f64; 2] {
        *self.direction.get_or_init(|| self.compute_direction())
    }

    fn compute_line(&self) -> Vector3<f64> {
        let [p0, p1] = self.endpoints();
        let a = p1[1] - p0[1];
        let b = p0[0] - p1[0];
        let c = p1[0] * p0[1] - p0[0] * p1[1];
        let norm = (a * a + b * b).sqrt();
        if norm > 0.0 {
            Vector3::new(a / norm, b / norm, c / norm)
        } else {
            Vector3::zeros()
        }
    }

    /// Line through both ends: ax + by + c = 0, with sqrt(a^2+b^2)=1
    pub fn line(&self) -> Vector3<f64> {
        *self.line.get_or_init(|| self.compute_line())
    }
}
