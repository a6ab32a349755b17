use super::{TrackFailure, Tracker, MIN_SCAN};
use crate::edges::GradientField;
use crate::geometry::{AbsRat, Point, Vector};
use crate::segments::{BlurredSegment, SegmentBuilder};
use log::debug;

/// Gap bookkeeping of one side: scans missed since the gap opened and
/// points accepted since then.
struct Side {
    scanning: bool,
    stop: usize,
    start: usize,
}

impl Side {
    fn new() -> Self {
        Self {
            scanning: true,
            stop: 0,
            start: 0,
        }
    }

    fn accepted(&mut self) {
        if self.stop == 0 {
            self.start = 0;
        } else {
            self.start += 1;
            if self.start >= self.stop {
                self.stop = 0;
                self.start = 0;
            }
        }
    }

    /// Returns true when the side has to stop.
    fn missed(&mut self, accepted_lacks: usize) -> bool {
        self.stop += 1;
        self.stop - self.start > accepted_lacks
    }
}

/// Squared cosine test for the crosswise abort: more than about 41° apart.
fn is_crosswise(dir: Vector, scan_dir: Vector) -> bool {
    dir.squared_cosine_below(scan_dir, 9, 16)
}

impl Tracker {
    /// Direction constrained growth around `center`.
    ///
    /// Scans run across `scan_dir` over `scan_width` pixels (at least
    /// [`MIN_SCAN`]); candidates are the local maxima whose gradient points
    /// the same way as `gref`. [`failure`](Self::failure) tells why growth
    /// stopped.
    pub fn fine_track(
        &mut self,
        field: &GradientField,
        max_width: i32,
        center: Point,
        scan_dir: Vector,
        scan_width: i32,
        gref: Vector,
    ) -> Option<BlurredSegment> {
        let scan_width = scan_width.max(MIN_SCAN as i32);
        let mut normal = scan_dir.orthog();
        if !normal.is_directed_as(gref) {
            normal = -normal;
        }
        self.failure = TrackFailure::NONE;

        let Some(mut scanner) =
            self.provider
                .for_center(center, normal, scan_width, self.config.dynamic_scans)
        else {
            self.failure = TrackFailure::NO_START;
            return None;
        };
        let pix = scanner.first();
        if pix.len() < MIN_SCAN {
            self.failure = TrackFailure::NO_START;
            return None;
        }
        self.record(&pix);
        let Some(&first) = field.local_max_directed(&pix, normal).first() else {
            self.failure = TrackFailure::NO_START;
            return None;
        };

        let mut bs = SegmentBuilder::new(AbsRat::from_int(max_width as i64), pix[first]);
        let mut thickness_control = self.config.thickness_control;
        let mut stable_width = 0usize;
        let mut count = 0usize;
        self.last_left_scan = 0;
        self.last_right_scan = 0;
        let mut right = Side::new();
        let mut left = Side::new();

        while right.scanning || left.scanning {
            count += 1;
            let width = bs.strict_thickness();

            if thickness_control && stable_width >= self.config.thickness_control_delay {
                let assigned = bs.digital_thickness().sum_half();
                if assigned.less_than(&bs.max_width()) {
                    bs.set_max_width(assigned);
                }
                thickness_control = false;
            }

            if self.config.dynamic_scans && count > self.config.fitting_delay && bs.is_lineable() {
                if count == self.config.fitting_delay + 1
                    && is_crosswise(bs.support_vector(), scan_dir)
                {
                    right.scanning = false;
                    left.scanning = false;
                    self.failure.insert(TrackFailure::LOST_ORIENTATION);
                }
                if let Some(line) = bs.line() {
                    let axis = line.medial_axis();
                    scanner.bind_to(axis.a(), axis.b(), axis.c());
                }
            } else if self.config.track_crosswise
                && count > 3
                && bs.is_lineable()
                && is_crosswise(bs.support_vector(), scan_dir)
            {
                right.scanning = false;
                left.scanning = false;
                self.failure.insert(TrackFailure::LOST_ORIENTATION);
            }

            if right.scanning {
                let pix = scanner.next_on_right();
                if pix.len() < MIN_SCAN {
                    self.failure.insert(TrackFailure::IMAGE_BOUND_ON_RIGHT);
                    right.scanning = false;
                } else {
                    self.record(&pix);
                    let added = field
                        .local_max_directed(&pix, normal)
                        .into_iter()
                        .any(|i| bs.add_right(pix[i]));
                    stable_width += 1;
                    if added {
                        if thickness_control && width.less_than(&bs.strict_thickness()) {
                            stable_width = 0;
                        }
                        self.last_right_scan = count;
                        right.accepted();
                    } else if right.missed(self.config.accepted_lacks) {
                        if bs.len() <= 3 {
                            self.failure = TrackFailure::NO_START;
                        }
                        right.scanning = false;
                    }
                }
            }

            if left.scanning {
                let pix = scanner.next_on_left();
                if pix.len() < MIN_SCAN {
                    self.failure.insert(TrackFailure::IMAGE_BOUND_ON_LEFT);
                    left.scanning = false;
                } else {
                    self.record(&pix);
                    let added = field
                        .local_max_directed(&pix, normal)
                        .into_iter()
                        .any(|i| bs.add_left(pix[i]));
                    stable_width += 1;
                    if added {
                        if thickness_control && width.less_than(&bs.strict_thickness()) {
                            stable_width = 0;
                        }
                        self.last_left_scan = count;
                        left.accepted();
                    } else if left.missed(self.config.accepted_lacks) {
                        if bs.len() <= 3 {
                            self.failure = TrackFailure::NO_START;
                        }
                        left.scanning = false;
                    }
                }
            }
        }

        // Unconfirmed tails after a gap are dropped.
        if right.start > 0 {
            bs.remove_right(right.start);
        }
        if left.start > 0 {
            bs.remove_left(left.start);
        }
        if self.failure.contains(TrackFailure::LOST_ORIENTATION) {
            debug!(
                "Tracker::fine_track lost orientation around ({}, {}) after {count} scans",
                center.x, center.y
            );
        }
        bs.into_segment()
    }
}
