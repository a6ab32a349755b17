use super::point_list::BiPtList;
use super::segment::BlurredSegment;
use crate::digital::{DigitalStraightLine, DigitalStraightSegment, LineKind};
use crate::geometry::{AbsRat, BoundingBox, Point, Vector};
use crate::hull::ConvexHull;

/// Growth stage of a [`SegmentBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderState {
    /// Only the seed point.
    Seed,
    /// Points were added on one side of the seed only.
    OneSide,
    /// Points on both sides, all collinear so far.
    Flat,
    /// Non-degenerate run with its convex hull.
    Hull(ConvexHull),
}

/// Blurred segment under construction.
///
/// Points are accepted at either end as long as the strict thickness of the
/// run stays within the width budget. A rejected point leaves the builder
/// exactly as it was.
#[derive(Clone, Debug)]
pub struct SegmentBuilder {
    points: BiPtList,
    state: BuilderState,
    max_width: AbsRat,
}

impl SegmentBuilder {
    pub fn new(max_width: AbsRat, seed: Point) -> Self {
        Self {
            points: BiPtList::new(seed),
            state: BuilderState::Seed,
            max_width,
        }
    }

    /// Replays two point runs around `center`, alternating right then left,
    /// each side stopping at its first refused point.
    pub fn from_sides(max_width: AbsRat, center: Point, left: &[Point], right: &[Point]) -> Self {
        let mut builder = Self::new(max_width, center);
        let mut lefts = left.iter();
        let mut rights = right.iter();
        let (mut scan_left, mut scan_right) = (true, true);
        while scan_left || scan_right {
            if scan_right {
                scan_right = rights.next().is_some_and(|&p| builder.add_right(p));
            }
            if scan_left {
                scan_left = lefts.next().is_some_and(|&p| builder.add_left(p));
            }
        }
        builder
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn points(&self) -> &BiPtList {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn seed(&self) -> Point {
        self.points.seed()
    }

    pub fn last_left(&self) -> Point {
        self.points.front()
    }

    pub fn last_right(&self) -> Point {
        self.points.back()
    }

    pub fn max_width(&self) -> AbsRat {
        self.max_width
    }

    /// Changes the width budget. Points already accepted are kept.
    pub fn set_max_width(&mut self, width: AbsRat) {
        self.max_width = width;
    }

    pub fn add_left(&mut self, p: Point) -> bool {
        self.add(p, true)
    }

    pub fn add_right(&mut self, p: Point) -> bool {
        self.add(p, false)
    }

    fn add(&mut self, p: Point, to_left: bool) -> bool {
        match &mut self.state {
            BuilderState::Hull(hull) => {
                let insertion = hull.insert(p, to_left);
                if insertion.thickness().greater_than(&self.max_width) {
                    return false;
                }
                insertion.commit();
            }
            BuilderState::Seed => self.state = BuilderState::OneSide,
            BuilderState::OneSide | BuilderState::Flat => {
                let height = self.points.height_to_ends(p);
                if height.greater_than(&self.max_width) {
                    return false;
                }
                let (front, back) = (self.points.front(), self.points.back());
                let hull = if height.numerator() == 0 {
                    None
                } else if to_left {
                    ConvexHull::new(p, front, back)
                } else {
                    ConvexHull::new(front, back, p)
                };
                self.state = match hull {
                    Some(hull) => BuilderState::Hull(hull),
                    None => BuilderState::Flat,
                };
            }
        }
        if to_left {
            self.points.add_front(p);
        } else {
            self.points.add_back(p);
        }
        true
    }

    /// Drops `n` points from the left end; only effective once the hull
    /// exists. The hull itself is not shrunk.
    pub fn remove_left(&mut self, n: usize) {
        if matches!(self.state, BuilderState::Hull(_)) {
            self.points.remove_front(n);
        }
    }

    /// Drops `n` points from the right end, see [`remove_left`](Self::remove_left).
    pub fn remove_right(&mut self, n: usize) {
        if matches!(self.state, BuilderState::Hull(_)) {
            self.points.remove_back(n);
        }
    }

    /// Continuous hull width, checked against the budget on each insertion.
    pub fn strict_thickness(&self) -> AbsRat {
        match &self.state {
            BuilderState::Hull(hull) => hull.thickness(),
            _ => AbsRat::ZERO,
        }
    }

    /// Width of the enclosing digital line, `nu / period`.
    pub fn digital_thickness(&self) -> AbsRat {
        match self.hull_line() {
            Some(line) => line.width(),
            None => AbsRat::from_int(1),
        }
    }

    fn hull_line(&self) -> Option<DigitalStraightLine> {
        match &self.state {
            BuilderState::Hull(hull) => hull
                .antipodal_edge_and_vertex()
                .map(|(s, e, v)| DigitalStraightLine::from_antipodal(s, e, v)),
            _ => None,
        }
    }

    /// Enclosing digital line, a thin one through both ends before the hull
    /// exists, `None` for a lone seed.
    pub fn line(&self) -> Option<DigitalStraightLine> {
        match &self.state {
            BuilderState::Seed => None,
            BuilderState::Hull(_) => self.hull_line(),
            BuilderState::OneSide | BuilderState::Flat => Some(DigitalStraightLine::through(
                self.last_left(),
                self.last_right(),
                LineKind::Thin,
            )),
        }
    }

    /// True once the run has a direction of its own.
    pub fn is_lineable(&self) -> bool {
        !matches!(self.state, BuilderState::Seed)
    }

    pub fn support_vector(&self) -> Vector {
        match &self.state {
            BuilderState::Seed => Vector::new(1, 0),
            BuilderState::Hull(hull) => match hull.antipodal_edge_and_vertex() {
                Some((s, e, _)) => s.vector_to(e),
                None => self.last_left().vector_to(self.last_right()),
            },
            BuilderState::OneSide | BuilderState::Flat => {
                self.last_left().vector_to(self.last_right())
            }
        }
    }

    /// Freezes the run. `None` when it never left its seed.
    pub fn into_segment(self) -> Option<BlurredSegment> {
        let Self { points, state, .. } = self;
        match state {
            BuilderState::Seed => None,
            BuilderState::Hull(hull) => {
                let (s, e, v) = hull.antipodal_edge_and_vertex()?;
                let dss = DigitalStraightSegment::from_antipodal(s, e, v, points.extrema());
                Some(BlurredSegment::new(points, dss, Some((s, e, v))))
            }
            BuilderState::OneSide | BuilderState::Flat => {
                let (left, right) = (points.front(), points.back());
                if left == right {
                    return None;
                }
                let bbox = BoundingBox::of([left, right].iter())?;
                let dss = DigitalStraightSegment::through(left, right, LineKind::Thin, bbox);
                Some(BlurredSegment::new(points, dss, None))
            }
        }
    }
}
