use crate::geometry::{AbsRat, Point, Vector};

/// Which axis a width is measured along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Gap measured along `y` (between the edge line and the vertex, same column).
    Vertical,
    /// Gap measured along `x`.
    Horizontal,
}

impl Axis {
    /// Edge component dividing the cross product; zero for edges parallel
    /// to the axis, which cannot measure along it.
    #[inline]
    pub(crate) fn run(self, edge: Vector) -> i64 {
        match self {
            Axis::Vertical => edge.x as i64,
            Axis::Horizontal => edge.y as i64,
        }
    }
}

/// Vertex/edge pair of a convex polygon realising its minimal width along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Antipodal {
    pub vertex: Point,
    pub edge_start: Point,
    pub edge_end: Point,
    pub width: AbsRat,
    pub axis: Axis,
}

impl Antipodal {
    /// Width of `vertex` above the edge `edge_start -> edge_end` along
    /// `axis`; `None` when the edge is parallel to the axis.
    pub(crate) fn measure(
        edge_start: Point,
        edge_end: Point,
        vertex: Point,
        axis: Axis,
    ) -> Option<Self> {
        let e = edge_start.vector_to(edge_end);
        let run = axis.run(e);
        (run != 0).then(|| Antipodal {
            vertex,
            edge_start,
            edge_end,
            width: AbsRat::new(e.cross(edge_start.vector_to(vertex)), run),
            axis,
        })
    }
}
