use super::directional::{DirectionalScanner, ScanBounds};
use super::octant::normalise;
use crate::geometry::{Point, Vector};

/// Builds scanners clipped to one image rectangle.
#[derive(Clone, Copy, Debug)]
pub struct ScannerProvider {
    bounds: ScanBounds,
    ortho: bool,
}

impl ScannerProvider {
    /// Provider for a `width × height` image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bounds: ScanBounds {
                xmin: 0,
                ymin: 0,
                xmax: width as i32,
                ymax: height as i32,
            },
            ortho: false,
        }
    }

    /// Switches to axis-parallel scan lines (the strip stays oblique).
    pub fn with_ortho(mut self, ortho: bool) -> Self {
        self.ortho = ortho;
        self
    }

    #[inline]
    pub fn is_ortho(&self) -> bool {
        self.ortho
    }

    fn pattern(&self, dir: Vector) -> Vec<bool> {
        if self.ortho {
            vec![false; dir.chessboard() as usize]
        } else {
            dir.steps()
        }
    }

    /// Static scanner whose central scan runs from `p1` to `p2`, the strip
    /// being bounded by the lines through both ends orthogonal to the stroke.
    ///
    /// Returns `None` for a null stroke.
    pub fn for_stroke(&self, p1: Point, p2: Point) -> Option<DirectionalScanner> {
        let dir = normalise(p1.vector_to(p2));
        if dir.is_null() {
            return None;
        }
        let v1 = dir.dot(Vector::new(p1.x, p1.y));
        let v2 = dir.dot(Vector::new(p2.x, p2.y));
        let (start, c1, c2) = if v1 <= v2 { (p1, v1, v2) } else { (p2, v2, v1) };
        let origin = if self.ortho {
            Point::new((p1.x + p2.x) / 2, (p1.y + p2.y) / 2)
        } else {
            start
        };
        Some(DirectionalScanner::new(
            dir,
            &self.pattern(dir),
            origin,
            c1,
            c2,
            self.bounds,
            false,
        ))
    }

    /// Scanner along `dir` whose central scan is centred on `center` and
    /// spans `(length + 1) / 2` steps on each side of it.
    ///
    /// `adaptive` scanners accept [`DirectionalScanner::bind_to`].
    pub fn for_center(
        &self,
        center: Point,
        dir: Vector,
        length: i32,
        adaptive: bool,
    ) -> Option<DirectionalScanner> {
        let dir = normalise(dir);
        if dir.is_null() {
            return None;
        }
        let half = ((length.max(0) + 1) / 2) as i64;
        let pattern = dir.steps();
        // Strip ends are measured along the template digital line.
        let probe = DirectionalScanner::new(dir, &pattern, center, 0, 0, self.bounds, false);
        let c1 = probe.value_at(0, -half);
        let c2 = probe.value_at(0, half);
        Some(DirectionalScanner::new(
            dir,
            &self.pattern(dir),
            center,
            c1,
            c2,
            self.bounds,
            adaptive,
        ))
    }
}
