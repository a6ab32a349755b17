use super::octant::Octant;
use crate::digital::floor_div;
use crate::geometry::{Point, Vector};
use serde::Serialize;

/// Position of a pixel in scanner coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScanPosition {
    /// Scan line index: 0 for the central line, positive on the right.
    pub line: i64,
    /// Signed index along the line, counted from the line origin.
    pub offset: i64,
}

/// Inclusive-exclusive image rectangle `[xmin, xmax) × [ymin, ymax)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScanBounds {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl ScanBounds {
    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x < self.xmax && p.y >= self.ymin && p.y < self.ymax
    }
}

/// Incremental generator of parallel scan lines inside a strip.
///
/// Scan lines are translates of one digital template line, one minor-axis
/// unit apart, so that together they tile the plane. Each returned scan is
/// the run of pixels of its line lying in the strip `c1 <= a*x + b*y <= c2`
/// and in the image. Left and right cursors move away from the central line
/// independently; an empty scan means the strip left the image on that side.
///
/// Adaptive scanners can be re-centred on a new strip with
/// [`bind_to`](Self::bind_to) while keeping their scan lines.
#[derive(Clone, Debug)]
pub struct DirectionalScanner {
    octant: Octant,
    template: Vector,
    template_nu: i64,
    a: i64,
    b: i64,
    c1: i64,
    c2: i64,
    /// `cum[i]` is the number of minor moves in the first `i` pattern steps.
    cum: Vec<i64>,
    origin: Point,
    bounds: ScanBounds,
    left: i64,
    right: i64,
    adaptive: bool,
}

impl DirectionalScanner {
    /// `dir` must be normalised and non null; `pattern` has one entry per
    /// major step of `dir` (all `false` for axis-parallel scans).
    pub(crate) fn new(
        dir: Vector,
        pattern: &[bool],
        origin: Point,
        c1: i64,
        c2: i64,
        bounds: ScanBounds,
        adaptive: bool,
    ) -> Self {
        let mut cum = Vec::with_capacity(pattern.len() + 1);
        let mut acc = 0i64;
        cum.push(0);
        for &step in pattern {
            if step {
                acc += 1;
            }
            cum.push(acc);
        }
        if cum.len() == 1 {
            cum.push(0);
        }
        Self {
            octant: Octant::of(dir.x, dir.y),
            template: dir,
            template_nu: c2 - c1,
            a: dir.x as i64,
            b: dir.y as i64,
            c1,
            c2,
            cum,
            origin,
            bounds,
            left: 0,
            right: 0,
            adaptive,
        }
    }

    #[inline]
    pub fn octant(&self) -> Octant {
        self.octant
    }

    /// Template scan direction.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.template
    }

    #[inline]
    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    /// Current strip `(a, b, c1, c2)`.
    pub fn strip(&self) -> (i64, i64, i64, i64) {
        (self.a, self.b, self.c1, self.c2)
    }

    fn period(&self) -> i64 {
        (self.cum.len() - 1) as i64
    }

    fn minor_at(&self, t: i64) -> i64 {
        let l = self.period();
        let m = self.cum[l as usize];
        t.div_euclid(l) * m + self.cum[t.rem_euclid(l) as usize]
    }

    fn pixel(&self, line: i64, t: i64) -> Point {
        let (maj, min, right) = (self.octant.major(), self.octant.minor(), self.octant.right());
        let s = self.minor_at(t);
        let x = self.origin.x as i64 + right.x as i64 * line + maj.x as i64 * t + min.x as i64 * s;
        let y = self.origin.y as i64 + right.y as i64 * line + maj.y as i64 * t + min.y as i64 * s;
        Point::new(x as i32, y as i32)
    }

    /// Strip coordinate of the pixel at `t` on scan line `line`.
    pub(crate) fn value_at(&self, line: i64, t: i64) -> i64 {
        self.value(self.pixel(line, t))
    }

    #[inline]
    fn value(&self, p: Point) -> i64 {
        self.a * p.x as i64 + self.b * p.y as i64
    }

    fn scan_line(&self, line: i64) -> Vec<Point> {
        let l = self.period();
        let (maj, min) = (self.octant.major(), self.octant.minor());
        let m = self.cum[l as usize];
        let gain = self.a * (maj.x as i64 * l + min.x as i64 * m)
            + self.b * (maj.y as i64 * l + min.y as i64 * m);
        if gain <= 0 {
            return Vec::new();
        }
        let v0 = self.value(self.pixel(line, 0));
        let mut t = floor_div((self.c1 - v0) * l, gain);
        let guard = 2 * l + 8;
        let mut n = 0;
        while n < guard && self.value(self.pixel(line, t)) >= self.c1 {
            t -= 1;
            n += 1;
        }
        n = 0;
        while n < guard && self.value(self.pixel(line, t)) < self.c1 {
            t += 1;
            n += 1;
        }
        let mut scan = Vec::new();
        loop {
            let p = self.pixel(line, t);
            if self.value(p) > self.c2 {
                break;
            }
            if self.bounds.contains(p) {
                scan.push(p);
            } else if !scan.is_empty() {
                break;
            }
            t += 1;
        }
        scan
    }

    /// Pixels of the central scan line.
    pub fn first(&self) -> Vec<Point> {
        self.scan_line(0)
    }

    /// Advances the left cursor by one line and returns its pixels.
    pub fn next_on_left(&mut self) -> Vec<Point> {
        self.left -= 1;
        self.scan_line(self.left)
    }

    /// Advances the right cursor by one line and returns its pixels.
    pub fn next_on_right(&mut self) -> Vec<Point> {
        self.right += 1;
        self.scan_line(self.right)
    }

    /// Re-centres an adaptive scanner on the line `a*x + b*y = c`.
    ///
    /// The strip width is rescaled by the ratio between the L1 norms or the
    /// L∞ norms of the new and template normals, whichever grows the most.
    /// Ignored on static scanners and for a line parallel to the scans.
    pub fn bind_to(&mut self, a: i32, b: i32, c: i32) {
        if !self.adaptive {
            return;
        }
        let (mut a, mut b, mut c) = (a as i64, b as i64, c as i64);
        let dot = a * self.template.x as i64 + b * self.template.y as i64;
        if dot == 0 {
            return;
        }
        if dot < 0 {
            a = -a;
            b = -b;
            c = -c;
        }
        let (ta, tb) = ((self.template.x as i64).abs(), (self.template.y as i64).abs());
        let (old_n1, old_ninf) = (ta + tb, ta.max(tb));
        let (na, nb) = (a.abs(), b.abs());
        let (new_n1, new_ninf) = (na + nb, na.max(nb));
        let nu = if new_n1 * old_ninf > old_n1 * new_ninf {
            self.template_nu * new_n1 / old_n1
        } else {
            self.template_nu * new_ninf / old_ninf
        };
        self.a = a;
        self.b = b;
        self.c1 = c - nu / 2;
        self.c2 = c + nu / 2;
    }

    /// Scanner coordinates of `p`.
    pub fn locate(&self, p: Point) -> ScanPosition {
        let (maj, min, right) = (self.octant.major(), self.octant.minor(), self.octant.right());
        if self.octant.is_x_major() {
            let t = (p.x - self.origin.x) as i64 * maj.x as i64;
            let y0 = self.origin.y as i64 + min.y as i64 * self.minor_at(t);
            ScanPosition {
                line: (p.y as i64 - y0) * right.y as i64,
                offset: t,
            }
        } else {
            let t = (p.y - self.origin.y) as i64 * maj.y as i64;
            let x0 = self.origin.x as i64 + min.x as i64 * self.minor_at(t);
            ScanPosition {
                line: (p.x as i64 - x0) * right.x as i64,
                offset: t,
            }
        }
    }
}
