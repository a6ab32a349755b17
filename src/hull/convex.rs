use super::antipodal::{Antipodal, Axis};
use crate::geometry::{AbsRat, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Vertex {
    pt: Point,
    prev: usize,
    next: usize,
    live: bool,
}

/// Edge (by its start vertex) and the vertex farthest from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pair {
    edge: usize,
    vertex: usize,
}

/// Convex hull of a point run grown only at its two ends.
///
/// Vertices live in an arena and form a counter-clockwise ring through
/// `prev`/`next` indices. Vertices dropped from the ring stay in the arena
/// with their links untouched, which makes undoing an insertion a matter of
/// truncating the arena and restoring two links.
///
/// The minimal-width pair of each axis is kept up to date by local walks
/// from the previous pair and the two new edges, so an insertion costs time
/// proportional to the vertices it removes plus the distance the pairs move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvexHull {
    verts: Vec<Vertex>,
    left: usize,
    right: usize,
    size: usize,
    vertical: Option<Pair>,
    horizontal: Option<Pair>,
}

#[derive(Clone, Copy, Debug)]
struct Snapshot {
    len: usize,
    back_link: Option<(usize, usize)>,
    front_link: Option<(usize, usize)>,
    left: usize,
    right: usize,
    size: usize,
    vertical: Option<Pair>,
    horizontal: Option<Pair>,
}

impl ConvexHull {
    /// Hull of the triangle `(left, center, right)`, `left` and `right` being
    /// the current ends of the run. `None` when the points are collinear.
    pub fn new(left: Point, center: Point, right: Point) -> Option<Self> {
        let turn = left.vector_to(center).cross(left.vector_to(right));
        if turn == 0 {
            return None;
        }
        // Counter-clockwise ring order.
        let order = if turn > 0 {
            [left, center, right]
        } else {
            [left, right, center]
        };
        let verts = (0..3)
            .map(|i| Vertex {
                pt: order[i],
                prev: (i + 2) % 3,
                next: (i + 1) % 3,
                live: true,
            })
            .collect();
        let mut hull = Self {
            verts,
            left: 0,
            right: if turn > 0 { 2 } else { 1 },
            size: 3,
            vertical: None,
            horizontal: None,
        };
        hull.vertical = hull.triangle_pair(Axis::Vertical);
        hull.horizontal = hull.triangle_pair(Axis::Horizontal);
        Some(hull)
    }

    fn triangle_pair(&self, axis: Axis) -> Option<Pair> {
        let mut best: Option<(Pair, AbsRat)> = None;
        for edge in 0..3 {
            let pair = Pair {
                edge,
                vertex: self.verts[edge].prev,
            };
            if let Some(width) = self.width(pair, axis) {
                if best.map_or(true, |(_, w)| width.less_than(&w)) {
                    best = Some((pair, width));
                }
            }
        }
        best.map(|(pair, _)| pair)
    }

    /// Ring vertices in counter-clockwise order from the left end.
    pub fn vertices(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.size);
        let mut i = self.left;
        for _ in 0..self.size {
            out.push(self.verts[i].pt);
            i = self.verts[i].next;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn left_end(&self) -> Point {
        self.verts[self.left].pt
    }

    pub fn right_end(&self) -> Point {
        self.verts[self.right].pt
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        self.verts[i].next
    }

    #[inline]
    fn prev(&self, i: usize) -> usize {
        self.verts[i].prev
    }

    /// Signed turn of `p` relative to the edge leaving vertex `i`.
    #[inline]
    fn side(&self, i: usize, p: Point) -> i64 {
        let a = self.verts[i].pt;
        let b = self.verts[self.next(i)].pt;
        a.vector_to(b).cross(a.vector_to(p))
    }

    /// Edge visible from `p`, looked up around the end vertex `hint` first.
    ///
    /// A point lying beyond the run end in the scan order always sees one of
    /// the two edges at that end; the walk around the ring only runs for
    /// points that do not.
    fn find_visible_edge(&self, hint: usize, p: Point) -> Option<usize> {
        if self.side(hint, p) < 0 {
            return Some(hint);
        }
        let prev = self.prev(hint);
        if self.side(prev, p) < 0 {
            return Some(prev);
        }
        let mut i = self.next(hint);
        for _ in 2..self.size {
            if self.side(i, p) < 0 {
                return Some(i);
            }
            i = self.next(i);
        }
        None
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            len: self.verts.len(),
            back_link: None,
            front_link: None,
            left: self.left,
            right: self.right,
            size: self.size,
            vertical: self.vertical,
            horizontal: self.horizontal,
        }
    }

    fn restore(&mut self, snap: &Snapshot) {
        self.verts.truncate(snap.len);
        if let (Some((b, next)), Some((f, prev))) = (snap.back_link, snap.front_link) {
            // Removed vertices kept their links: revive them up to `f`.
            let mut i = next;
            while i != f {
                self.verts[i].live = true;
                i = self.next(i);
            }
            self.verts[b].next = next;
            self.verts[f].prev = prev;
        }
        self.left = snap.left;
        self.right = snap.right;
        self.size = snap.size;
        self.vertical = snap.vertical;
        self.horizontal = snap.horizontal;
    }

    /// Links `p` into the ring; returns `false` (hull untouched) when `p`
    /// lies inside or on the hull.
    fn link(&mut self, p: Point, to_left: bool, snap: &mut Snapshot) -> bool {
        let hint = if to_left { self.left } else { self.right };
        let Some(e) = self.find_visible_edge(hint, p) else {
            return false;
        };
        let mut back = e;
        let mut front = self.next(e);
        let mut steps = 0;
        while steps < self.size {
            let prev = self.prev(back);
            if prev == front || self.side(prev, p) > 0 {
                break;
            }
            back = prev;
            steps += 1;
        }
        while steps < self.size {
            if self.next(front) == back || self.side(front, p) > 0 {
                break;
            }
            front = self.next(front);
            steps += 1;
        }

        // Ends swallowed by the new vertex fall back to `back`.
        let mut i = self.next(back);
        let mut removed = 0;
        let mut left_removed = false;
        let mut right_removed = false;
        while i != front {
            left_removed |= i == self.left;
            right_removed |= i == self.right;
            self.verts[i].live = false;
            removed += 1;
            i = self.next(i);
        }

        snap.back_link = Some((back, self.next(back)));
        snap.front_link = Some((front, self.prev(front)));
        let idx = self.verts.len();
        self.verts.push(Vertex {
            pt: p,
            prev: back,
            next: front,
            live: true,
        });
        self.verts[back].next = idx;
        self.verts[front].prev = idx;
        self.size = self.size + 1 - removed;
        if to_left {
            self.left = idx;
            if right_removed {
                self.right = back;
            }
        } else {
            self.right = idx;
            if left_removed {
                self.left = back;
            }
        }
        let opposite = if to_left { self.right } else { self.left };
        self.vertical = self.refresh(self.vertical, idx, back, opposite, Axis::Vertical);
        self.horizontal = self.refresh(self.horizontal, idx, back, opposite, Axis::Horizontal);
        true
    }

    /// Depth of vertex `v` on the inner side of the edge leaving `edge`.
    #[inline]
    fn depth(&self, edge: usize, v: usize) -> i64 {
        self.side(edge, self.verts[v].pt)
    }

    /// Vertex farthest from the edge leaving `edge`, climbing from `from`.
    /// Depth is unimodal around a strictly convex ring.
    fn farthest(&self, edge: usize, from: usize) -> usize {
        let mut v = from;
        let mut d = self.depth(edge, v);
        let forward = self.depth(edge, self.next(v)) > d;
        loop {
            let n = if forward { self.next(v) } else { self.prev(v) };
            let dn = self.depth(edge, n);
            if dn <= d {
                return v;
            }
            v = n;
            d = dn;
        }
    }

    fn width(&self, pair: Pair, axis: Axis) -> Option<AbsRat> {
        self.measure(pair, axis).map(|ap| ap.width)
    }

    fn measure(&self, pair: Pair, axis: Axis) -> Option<Antipodal> {
        Antipodal::measure(
            self.verts[pair.edge].pt,
            self.verts[self.next(pair.edge)].pt,
            self.verts[pair.vertex].pt,
            axis,
        )
    }

    fn evaluate(&self, edge: usize, from: usize, axis: Axis) -> Option<(Pair, AbsRat)> {
        let pair = Pair {
            edge,
            vertex: self.farthest(edge, from),
        };
        self.width(pair, axis).map(|w| (pair, w))
    }

    /// Minimal pair after inserting vertex `n` right after `back`.
    fn refresh(
        &self,
        old: Option<Pair>,
        n: usize,
        back: usize,
        opposite: usize,
        axis: Axis,
    ) -> Option<Pair> {
        let from = old
            .map(|pair| pair.vertex)
            .filter(|&v| self.verts[v].live)
            .unwrap_or(opposite);
        let mut best: Option<(Pair, AbsRat)> = None;
        let mut keep = |candidate: Option<(Pair, AbsRat)>| {
            if let Some((pair, w)) = candidate {
                if best.map_or(true, |(_, bw)| w.less_than(&bw)) {
                    best = Some((pair, w));
                }
            }
        };
        // An old edge survives unless its start was `back` or got removed.
        if let Some(pair) = old {
            if self.verts[pair.edge].live && pair.edge != back {
                keep(self.evaluate(pair.edge, from, axis));
            }
        }
        keep(self.evaluate(back, from, axis));
        keep(self.evaluate(n, from, axis));
        best.map(|(pair, w)| self.descend(pair, w, axis))
    }

    /// Moves the pair to neighbouring edges while the width decreases.
    ///
    /// The axis width of the hull is a convex function of the edge slope, so
    /// a pair no neighbour improves on is the global minimum. The neighbours
    /// of an edge in slope order are its two adjacent edges and the edges at
    /// its farthest vertex (two vertices when the opposite edge is parallel).
    fn descend(&self, mut pair: Pair, mut width: AbsRat, axis: Axis) -> Pair {
        loop {
            let (e, v) = (pair.edge, pair.vertex);
            let d = self.depth(e, v);
            let low = if self.depth(e, self.prev(v)) == d { self.prev(v) } else { v };
            let high = if self.depth(e, self.next(v)) == d { self.next(v) } else { v };
            let candidates = [
                (self.prev(e), v),
                (self.next(e), v),
                (self.prev(low), e),
                (low, e),
                (v, e),
                (high, e),
            ];
            let mut step = None;
            for (edge, from) in candidates {
                if let Some((next, w)) = self.evaluate(edge, from, axis) {
                    if w.less_than(&width) {
                        width = w;
                        step = Some(next);
                    }
                }
            }
            match step {
                Some(next) => pair = next,
                None => return pair,
            }
        }
    }

    /// Tentatively inserts `p` at one end of the run. The hull is restored
    /// when the returned handle is dropped without [`HullInsertion::commit`].
    pub fn insert(&mut self, p: Point, to_left: bool) -> HullInsertion<'_> {
        let mut snapshot = self.snapshot();
        let inserted = self.link(p, to_left, &mut snapshot);
        HullInsertion {
            hull: self,
            snapshot,
            inserted,
            committed: false,
        }
    }

    /// Inserts `p` unconditionally.
    pub fn add_point(&mut self, p: Point, to_left: bool) {
        self.insert(p, to_left).commit();
    }

    /// Minimal width along an axis, as an exact fraction.
    pub fn thickness(&self) -> AbsRat {
        self.minimal_pair().map_or(AbsRat::UNDEFINED, |pair| pair.width)
    }

    fn minimal_pair(&self) -> Option<Antipodal> {
        match (self.antipodal_on(Axis::Vertical), self.antipodal_on(Axis::Horizontal)) {
            (Some(v), Some(h)) => Some(if h.width.less_than(&v.width) { h } else { v }),
            (v, h) => v.or(h),
        }
    }

    /// Pair realising [`thickness`](Self::thickness).
    pub fn antipodal(&self) -> Option<Antipodal> {
        self.minimal_pair()
    }

    /// Minimal pair along the given axis.
    pub fn antipodal_on(&self, axis: Axis) -> Option<Antipodal> {
        let pair = match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        };
        pair.and_then(|pair| self.measure(pair, axis))
    }

    /// `(edge start, edge end, vertex)` of the minimal pair.
    pub fn antipodal_edge_and_vertex(&self) -> Option<(Point, Point, Point)> {
        self.minimal_pair()
            .map(|pair| (pair.edge_start, pair.edge_end, pair.vertex))
    }
}

/// Pending hull insertion. Dropping it without committing puts the hull
/// back in its exact previous state.
#[must_use = "an uncommitted insertion is rolled back on drop"]
pub struct HullInsertion<'a> {
    hull: &'a mut ConvexHull,
    snapshot: Snapshot,
    inserted: bool,
    committed: bool,
}

impl HullInsertion<'_> {
    /// `false` when the point fell inside the hull and nothing changed.
    pub fn inserted(&self) -> bool {
        self.inserted
    }

    /// Thickness of the hull including the pending point.
    pub fn thickness(&self) -> AbsRat {
        self.hull.thickness()
    }

    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for HullInsertion<'_> {
    fn drop(&mut self) {
        if !self.committed && self.inserted {
            self.hull.restore(&self.snapshot);
        }
    }
}
