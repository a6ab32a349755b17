use super::{Tracker, MIN_SCAN};
use crate::edges::GradientField;
use crate::geometry::{AbsRat, Point};
use crate::scanner::DirectionalScanner;
use crate::segments::{BlurredSegment, SegmentBuilder};

impl Tracker {
    /// Undirected growth across the stroke `p1 p2`, seeded on the strongest
    /// gradient of the stroke itself.
    pub fn fast_track(
        &mut self,
        field: &GradientField,
        max_width: i32,
        p1: Point,
        p2: Point,
    ) -> Option<BlurredSegment> {
        let scanner = self.provider.for_stroke(p1, p2)?;
        let pix = scanner.first();
        if pix.len() < MIN_SCAN {
            return None;
        }
        self.record(&pix);
        let seed = pix[field.largest_in(&pix)?];
        self.grow_fast(field, max_width, scanner, seed)
    }

    /// Same as [`fast_track`](Self::fast_track) from a known `center`, the
    /// central scan running along `p1 p2` over `scan_width` pixels.
    pub fn fast_track_centered(
        &mut self,
        field: &GradientField,
        max_width: i32,
        p1: Point,
        p2: Point,
        scan_width: i32,
        center: Point,
    ) -> Option<BlurredSegment> {
        let scan_width = scan_width.max(MIN_SCAN as i32);
        let scanner = self
            .provider
            .for_center(center, p1.vector_to(p2), scan_width, false)?;
        let pix = scanner.first();
        if pix.len() < MIN_SCAN {
            return None;
        }
        self.record(&pix);
        self.grow_fast(field, max_width, scanner, center)
    }

    fn grow_fast(
        &mut self,
        field: &GradientField,
        max_width: i32,
        mut scanner: DirectionalScanner,
        seed: Point,
    ) -> Option<BlurredSegment> {
        let mut bs = SegmentBuilder::new(AbsRat::from_int(max_width as i64), seed);
        let mut right = Side::new(seed);
        let mut left = Side::new(seed);
        let mut budget = self.config.max_scan;
        while (right.scanning || left.scanning) && budget > 0 {
            budget -= 1;
            if right.scanning {
                let pix = scanner.next_on_right();
                self.extend_fast(field, &mut bs, &mut right, &pix, false);
            }
            if left.scanning {
                let pix = scanner.next_on_left();
                self.extend_fast(field, &mut bs, &mut left, &pix, true);
            }
        }
        bs.into_segment()
    }

    fn extend_fast(
        &mut self,
        field: &GradientField,
        bs: &mut SegmentBuilder,
        side: &mut Side,
        pix: &[Point],
        on_left: bool,
    ) {
        if pix.len() < MIN_SCAN {
            side.scanning = false;
            return;
        }
        self.record(pix);
        let candidate = field.largest_in(pix).map(|i| pix[i]).filter(|&p| {
            !self.config.proximity_constraint
                || side.last.manhattan(p) <= self.config.proximity_threshold
        });
        let added = match candidate {
            Some(p) if on_left => bs.add_left(p),
            Some(p) => bs.add_right(p),
            None => false,
        };
        match candidate {
            Some(p) if added => {
                side.last = p;
                side.lacks = 0;
            }
            _ => {
                side.lacks += 1;
                if side.lacks > self.config.accepted_lacks {
                    side.scanning = false;
                }
            }
        }
    }
}

struct Side {
    scanning: bool,
    lacks: usize,
    last: Point,
}

impl Side {
    fn new(seed: Point) -> Self {
        Self {
            scanning: true,
            lacks: 0,
            last: seed,
        }
    }
}
