use super::params::EdgeDirection;
use super::result::ResultCode;
use super::{Detector, ProbeInput, FAST_TRACK_SCAN_WIDTH, PRELIM_MIN_HALF_WIDTH};
use crate::digital::{DigitalStraightLine, LineKind};
use crate::edges::GradientField;
use crate::geometry::{Point, Vector};
use crate::segments::BlurredSegment;
use crate::tracker::{Tracker, MIN_SCAN};
use log::debug;

/// Lateral extent, in probe periods, covered by a segment along the probe.
fn probe_expansion(probe: &ProbeInput, bs: &BlurredSegment) -> i64 {
    let line = DigitalStraightLine::through(probe.p1, probe.p2, LineKind::Naive);
    let drlf = line.manhattan(bs.last_right()) - line.manhattan(bs.last_left());
    1 + drlf.abs() as i64
}

fn fast_track(
    tracker: &mut Tracker,
    field: &GradientField,
    max_width: i32,
    probe: &ProbeInput,
) -> Option<BlurredSegment> {
    match probe.center {
        Some(center) if probe.scan_width != 0 => tracker.fast_track_centered(
            field,
            max_width,
            probe.p1,
            probe.p2,
            probe.scan_width,
            center,
        ),
        _ => tracker.fast_track(field, max_width, probe.p1, probe.p2),
    }
}

impl Detector {
    /// Runs the pipeline on the probe `p1 p2`.
    ///
    /// A degenerate probe (null, or shorter than a minimal scan) returns
    /// [`ResultCode::Void`] and leaves every stored result untouched.
    pub fn detect(&mut self, p1: Point, p2: Point) -> ResultCode {
        let res = self.run_probe(p1, p2, None, self.config.edge_direction);
        if res != ResultCode::Void {
            self.result = res;
        }
        res
    }

    /// Runs the pipeline on the probe `p1 p2`, the initial pass starting
    /// from `center` instead of the strongest gradient of the stroke.
    pub fn detect_centered(&mut self, p1: Point, p2: Point, center: Point) -> ResultCode {
        let res = self.run_probe(p1, p2, Some(center), self.config.edge_direction);
        if res != ResultCode::Void {
            self.result = res;
        }
        res
    }

    pub(super) fn run_probe(
        &mut self,
        p1: Point,
        p2: Point,
        center: Option<Point>,
        edge_direction: EdgeDirection,
    ) -> ResultCode {
        if p1 == p2 || (center.is_none() && p1.chessboard(p2) < MIN_SCAN as i32) {
            return ResultCode::Void;
        }
        let res = self.run_stages(p1, p2, center, edge_direction);
        if !res.is_ok() {
            debug!(
                "Detector::detect probe ({}, {}) -> ({}, {}): {} [{}]",
                p1.x,
                p1.y,
                p2.x,
                p2.y,
                res,
                res.code()
            );
        }
        res
    }

    fn clear_stages(&mut self) {
        self.prelim_tracker.clear_scans();
        self.initial_tracker.clear_scans();
        self.fine_tracker.clear_scans();
        self.prefilter.clear();
        self.filter.clear();
        self.prelim_bs = None;
        self.initial_bs = None;
        self.final_bs = None;
        self.prelim_input = None;
        self.initial_input = None;
    }

    fn run_stages(
        &mut self,
        p1: Point,
        p2: Point,
        center: Option<Point>,
        edge_direction: EdgeDirection,
    ) -> ResultCode {
        self.clear_stages();
        let min_size = self.config.effective_min_size();
        let fast_width = self.config.fast_track_width();
        let probe = ProbeInput {
            p1,
            p2,
            scan_width: if center.is_some() { FAST_TRACK_SCAN_WIDTH } else { 0 },
            center,
        };

        // Preliminary pass re-centring the probe on the segment found.
        let mut initial_probe = probe;
        if self.config.preliminary {
            self.prelim_input = Some(probe);
            let bspre = fast_track(&mut self.prelim_tracker, &self.field, fast_width, &probe);
            let Some(bspre) = bspre else {
                return ResultCode::PrelimNoDetection;
            };
            let too_few = bspre.len() < min_size;
            let bspre = self.prelim_bs.insert(bspre);
            if too_few {
                return ResultCode::PrelimTooFew;
            }
            let v0 = bspre.support_vector();
            let l = v0.chessboard();
            if l != 0 {
                if let Some(pc) = bspre.segment().center_of_intersection(p1, p2) {
                    let half = (2 * (1 + bspre.minimal_width().floor().unwrap_or(0) as i32))
                        .max(PRELIM_MIN_HALF_WIDTH);
                    let d = Vector::new(v0.y * half / l, -(v0.x * half / l));
                    initial_probe = ProbeInput {
                        p1: pc + d,
                        p2: pc + (-d),
                        scan_width: 0,
                        center: None,
                    };
                }
            }
        }
        self.initial_input = Some(initial_probe);

        // Initial undirected pass.
        let bsini = fast_track(
            &mut self.initial_tracker,
            &self.field,
            fast_width,
            &initial_probe,
        );
        let Some(mut bsini) = bsini else {
            return ResultCode::InitialNoDetection;
        };
        if bsini.len() < min_size {
            self.initial_bs = Some(bsini);
            return ResultCode::InitialTooFew;
        }

        if self.config.density_test {
            let expansion = probe_expansion(&initial_probe, &bsini);
            if (bsini.len() as i64) < expansion / 2 {
                self.initial_bs = Some(bsini);
                return ResultCode::InitialTooSparse;
            }
        }

        if self.config.prefilter {
            if let Some(filtered) = self.prefilter.filter(&bsini) {
                bsini = filtered;
            }
            if bsini.len() < min_size {
                self.initial_bs = Some(bsini);
                return ResultCode::InitialTooManyOutliers;
            }
        }

        let bsini = self.initial_bs.insert(bsini);
        let scan_dir = bsini.support_vector();
        if scan_dir.is_oriented_as(initial_probe.p1.vector_to(initial_probe.p2)) {
            return ResultCode::InitialCloseOrientation;
        }

        // Fine pass seeded on the initial segment.
        let mut gref = self.field.value(bsini.center());
        if edge_direction == EdgeDirection::Backward {
            gref = -gref;
        }
        let mut start = bsini.center();
        if self.config.recentering {
            if let Some(pc) = bsini
                .segment()
                .center_of_intersection(initial_probe.p1, initial_probe.p2)
            {
                start = pc;
            }
        }
        let fine_width = if self.config.fitting {
            let dss = bsini.segment();
            1 + dss.nu() / dss.period()
        } else {
            self.config.assigned_thickness
        };

        let bsf = self.fine_tracker.fine_track(
            &self.field,
            fine_width,
            start,
            scan_dir,
            2 * fine_width,
            gref,
        );
        let Some(bsf) = bsf else {
            return ResultCode::FinalNoDetection;
        };
        let bsf = self.final_bs.insert(bsf);
        let size = bsf.len();
        if size < min_size {
            return ResultCode::FinalTooFew;
        }

        if self.config.final_size_test && size < self.config.final_min_size {
            return ResultCode::FinalTooSmall;
        }

        if self.config.final_length_test {
            let dss = bsf.segment();
            if (size as i64) < (3 * dss.nu() as i64) / dss.period() as i64 {
                return ResultCode::FinalTooSparse;
            }
        }

        if self.config.final_density_test {
            let expansion = probe_expansion(&initial_probe, bsf);
            if expansion < 20 && (size as i64) < (expansion * 4) / 5 {
                return ResultCode::FinalTooSparse;
            }
        }

        if self.config.connected_components_test {
            let connected = bsf.count_of_connected_points(self.config.connected_min_size);
            if connected < size / 2 {
                return ResultCode::FinalTooSparse;
            }
        }

        if self.config.filter {
            match self.filter.filter(bsf) {
                Some(filtered) => self.final_bs = Some(filtered),
                None => return ResultCode::FinalTooManyOutliers,
            }
        }
        ResultCode::Ok
    }
}
