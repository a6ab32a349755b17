use super::params::EdgeDirection;
use super::{Detector, LastRun};
use crate::diagnostics::TimingBreakdown;
use crate::geometry::Point;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Summary of a whole image sweep or of a multi-selection.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub balanced: bool,
    /// Probe strokes processed.
    pub strokes: usize,
    /// Detections attempted.
    pub trials: usize,
    /// Segments accepted.
    pub segments: usize,
    /// Whether the run stopped on the segment limit.
    pub truncated: bool,
    /// Pixels covered by the occupancy mask at the end of the run.
    pub masked_pixels: usize,
    pub timings: TimingBreakdown,
}

impl Detector {
    fn begin_multi(&mut self) {
        self.segments.clear();
        self.field.set_masking(true);
        self.field.clear_mask();
        self.trials = 0;
    }

    fn end_multi(&mut self) -> usize {
        if self.max_trials > self.segments.len() {
            self.max_trials = 0;
        }
        let masked = self.field.masked_count();
        self.field.set_masking(false);
        self.final_bs = None;
        masked
    }

    fn vertical_stroke(&self, x: i32) -> (Point, Point) {
        let h = self.field.height() as i32;
        (Point::new(x, 0), Point::new(x, h - 1))
    }

    fn horizontal_stroke(&self, y: i32) -> (Point, Point) {
        let w = self.field.width() as i32;
        (Point::new(0, y), Point::new(w - 1, y))
    }

    /// Detects every segment of the image.
    ///
    /// Vertical strokes are laid every `sweep_step` pixels from the middle
    /// column leftwards then rightwards, horizontal ones the same way from
    /// the middle row. Accepted segments are masked so that later strokes do
    /// not find them again.
    pub fn detect_all(&mut self) -> SweepReport {
        self.last_run = LastRun::Sweep { balanced: false };
        let t0 = Instant::now();
        self.begin_multi();
        let step = self.config.effective_sweep_step();
        let (w, h) = (self.field.width() as i32, self.field.height() as i32);
        let mut strokes = 0;
        let mut timings = TimingBreakdown::default();

        let mut go_on = true;
        let mut x = w / 2;
        while go_on && x > 0 {
            let (p1, p2) = self.vertical_stroke(x);
            go_on = self.run_multi(p1, p2);
            strokes += 1;
            x -= step;
        }
        x = w / 2 + step;
        while go_on && x < w - 1 {
            let (p1, p2) = self.vertical_stroke(x);
            go_on = self.run_multi(p1, p2);
            strokes += 1;
            x += step;
        }
        let vertical_ms = t0.elapsed().as_secs_f64() * 1000.0;
        timings.push("vertical", vertical_ms);

        let mut y = h / 2;
        while go_on && y > 0 {
            let (p1, p2) = self.horizontal_stroke(y);
            go_on = self.run_multi(p1, p2);
            strokes += 1;
            y -= step;
        }
        y = h / 2 + step;
        while go_on && y < h - 1 {
            let (p1, p2) = self.horizontal_stroke(y);
            go_on = self.run_multi(p1, p2);
            strokes += 1;
            y += step;
        }
        let total_ms = t0.elapsed().as_secs_f64() * 1000.0;
        timings.push("horizontal", total_ms - vertical_ms);
        timings.total_ms = total_ms;

        self.finish_sweep(false, strokes, !go_on, timings)
    }

    /// Same as [`Detector::detect_all`] with the four stroke families
    /// interleaved: left, down, right, up, and again.
    pub fn detect_all_balanced(&mut self) -> SweepReport {
        self.last_run = LastRun::Sweep { balanced: true };
        let t0 = Instant::now();
        self.begin_multi();
        let step = self.config.effective_sweep_step();
        let (w, h) = (self.field.width() as i32, self.field.height() as i32);
        let mut strokes = 0;

        let (mut xl, mut yd) = (w / 2, h / 2);
        let (mut xr, mut yu) = (xl + step, yd + step);
        let (mut left, mut down, mut right, mut up) = (true, true, true, true);
        let mut go_on = true;
        while go_on && (left || down || right || up) {
            if left {
                let (p1, p2) = self.vertical_stroke(xl);
                go_on = self.run_multi(p1, p2);
                strokes += 1;
                xl -= step;
                left = xl > 0;
            }
            if go_on && down {
                let (p1, p2) = self.horizontal_stroke(yd);
                go_on = self.run_multi(p1, p2);
                strokes += 1;
                yd -= step;
                down = yd > 0;
            }
            if go_on && right {
                let (p1, p2) = self.vertical_stroke(xr);
                go_on = self.run_multi(p1, p2);
                strokes += 1;
                xr += step;
                right = xr < w - 1;
            }
            if go_on && up {
                let (p1, p2) = self.horizontal_stroke(yu);
                go_on = self.run_multi(p1, p2);
                strokes += 1;
                yu += step;
                up = yu < h - 1;
            }
        }
        let timings = TimingBreakdown::with_total(t0.elapsed().as_secs_f64() * 1000.0);
        self.finish_sweep(true, strokes, !go_on, timings)
    }

    fn finish_sweep(
        &mut self,
        balanced: bool,
        strokes: usize,
        truncated: bool,
        timings: TimingBreakdown,
    ) -> SweepReport {
        let masked_pixels = self.end_multi();
        debug!(
            "Detector::sweep balanced={} strokes={} trials={} segments={} elapsed_ms={:.3}",
            balanced,
            strokes,
            self.trials,
            self.segments.len(),
            timings.total_ms
        );
        SweepReport {
            balanced,
            strokes,
            trials: self.trials,
            segments: self.segments.len(),
            truncated,
            masked_pixels,
            timings,
        }
    }

    /// Runs a detection from every free local maximum of the stroke `p1 p2`.
    ///
    /// Returns `false` once the segment limit is reached.
    fn run_multi(&mut self, p1: Point, p2: Point) -> bool {
        let pts = p1.draw_to(p2);
        let candidates = self.field.local_max(&pts);
        if !candidates.is_empty() {
            debug!(
                "Detector::run_multi stroke ({}, {}) -> ({}, {}): {} candidates",
                p1.x,
                p1.y,
                p2.x,
                p2.y,
                candidates.len()
            );
        }
        let directions: &[EdgeDirection] = match self.config.edge_direction {
            EdgeDirection::Stroke => &[EdgeDirection::Stroke],
            _ => &[EdgeDirection::Forward, EdgeDirection::Backward],
        };
        let mut go_on = true;
        for i in candidates {
            if !go_on {
                break;
            }
            let start = pts[i];
            if !self.field.is_free(start) {
                continue;
            }
            for &dir in directions {
                if !go_on {
                    break;
                }
                let res = self.run_probe(p1, p2, Some(start), dir);
                if res.is_ok() {
                    if let Some(bs) = self.final_bs.take() {
                        self.field.set_mask(&bs.all_points());
                        self.segments.push(bs);
                        if self.segments.len() == self.max_trials {
                            go_on = false;
                        }
                    }
                }
                self.trials += 1;
            }
        }
        go_on
    }

    /// Detection on a user stroke.
    ///
    /// With `multi_selection` every candidate of the stroke is tried and the
    /// segments accumulate as in a sweep, otherwise this is
    /// [`Detector::detect`] except that a void probe is stored as the result
    /// too.
    pub fn detect_selection(&mut self, p1: Point, p2: Point) -> SweepReport {
        self.last_run = LastRun::Selection { p1, p2 };
        let t0 = Instant::now();
        if self.config.multi_selection {
            self.begin_multi();
            let go_on = self.run_multi(p1, p2);
            let timings = TimingBreakdown::with_total(t0.elapsed().as_secs_f64() * 1000.0);
            self.finish_sweep(false, 1, !go_on, timings)
        } else {
            self.segments.clear();
            self.result = self.run_probe(p1, p2, None, self.config.edge_direction);
            let found = usize::from(self.result.is_ok());
            SweepReport {
                balanced: false,
                strokes: 1,
                trials: 1,
                segments: found,
                truncated: false,
                masked_pixels: 0,
                timings: TimingBreakdown::with_total(t0.elapsed().as_secs_f64() * 1000.0),
            }
        }
    }

    /// Replays the last sweep or selection, typically after
    /// [`Detector::set_config`]. Does nothing before the first one.
    pub fn redetect(&mut self) -> Option<SweepReport> {
        match self.last_run {
            LastRun::None => None,
            LastRun::Sweep { balanced: false } => Some(self.detect_all()),
            LastRun::Sweep { balanced: true } => Some(self.detect_all_balanced()),
            LastRun::Selection { p1, p2 } => Some(self.detect_selection(p1, p2)),
        }
    }
}
