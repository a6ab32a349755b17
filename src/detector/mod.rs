//! Blurred segment detector.
//!
//! Overview
//! - A probe is a stroke `p1 p2` drawn across the expected segment. The
//!   [`Detector`] runs a staged acceptance pipeline on it: an optional
//!   preliminary pass re-centring the probe, an undirected initial pass, a
//!   density gate, an optional outlier pre-filter, an orientation gate, the
//!   direction-constrained fine pass, then size, length, density and
//!   connectivity gates and an optional outlier post-filter. Every gate has
//!   its own [`ResultCode`].
//! - Sweeps lay a grid of probe strokes over the whole image (vertical ones
//!   from the centre outwards, then horizontal ones). Every local maximum of
//!   a stroke not yet covered starts a detection; accepted segments are
//!   written into the gradient field's occupancy mask so that later strokes
//!   skip them.
//!
//! Ownership
//! - Single probe calls keep at most one segment per [`Step`]; the next call
//!   replaces them. Sweeps and multi-selections accumulate a list. Results
//!   can be moved out with [`Detector::take_blurred_segment`] and
//!   [`Detector::take_blurred_segments`].
//!
//! Modules
//! - [`params`]: [`DetectorConfig`] and [`EdgeDirection`].
//! - `result`: [`ResultCode`] and [`Step`].
//! - `pipeline`: the single probe pipeline.
//! - `sweep`: whole image and multi-selection runs.

pub mod params;
mod pipeline;
mod result;
mod sweep;

pub use params::{DetectorConfig, EdgeDirection, ABSOLUTE_MIN_SIZE};
pub use result::{ResultCode, Step};
pub use sweep::SweepReport;

use crate::edges::{FieldConfig, GradientField};
use crate::geometry::Point;
use crate::image::ImageU8;
use crate::segments::{BlurredSegment, OutlierFilter};
use crate::tracker::{TrackFailure, Tracker};
use serde::Serialize;

/// Scan width of the initial pass when started from a known point.
pub const FAST_TRACK_SCAN_WIDTH: i32 = 16;
/// Lower bound of the half length of a re-centred probe.
pub const PRELIM_MIN_HALF_WIDTH: i32 = 10;

/// Probe handed to one of the undirected passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProbeInput {
    pub p1: Point,
    pub p2: Point,
    /// Central scan width, 0 when the scan runs the whole stroke.
    pub scan_width: i32,
    pub center: Option<Point>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LastRun {
    None,
    Sweep { balanced: bool },
    Selection { p1: Point, p2: Point },
}

/// Blurred segment detector working on one gradient field.
pub struct Detector {
    config: DetectorConfig,
    field: GradientField,
    prelim_tracker: Tracker,
    initial_tracker: Tracker,
    fine_tracker: Tracker,
    prefilter: OutlierFilter,
    filter: OutlierFilter,
    prelim_bs: Option<BlurredSegment>,
    initial_bs: Option<BlurredSegment>,
    final_bs: Option<BlurredSegment>,
    segments: Vec<BlurredSegment>,
    prelim_input: Option<ProbeInput>,
    initial_input: Option<ProbeInput>,
    result: ResultCode,
    trials: usize,
    max_trials: usize,
    last_run: LastRun,
}

impl Detector {
    /// Detector owning `field`.
    pub fn new(field: GradientField, config: DetectorConfig) -> Self {
        let (w, h) = (field.width(), field.height());
        let tracker = Tracker::new(w, h, config.tracker.clone());
        Self {
            max_trials: config.max_trials,
            config,
            field,
            prelim_tracker: tracker.clone(),
            initial_tracker: tracker.clone(),
            fine_tracker: tracker,
            prefilter: OutlierFilter::new(),
            filter: OutlierFilter::new(),
            prelim_bs: None,
            initial_bs: None,
            final_bs: None,
            segments: Vec::new(),
            prelim_input: None,
            initial_input: None,
            result: ResultCode::Undetermined,
            trials: 0,
            last_run: LastRun::None,
        }
    }

    /// Builds the gradient field of `img` and a detector on it.
    pub fn from_image(img: &ImageU8, field_config: FieldConfig, config: DetectorConfig) -> Self {
        Self::new(GradientField::new(img, field_config), config)
    }

    /// Library version.
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Replaces the whole configuration. Stored results are kept.
    pub fn set_config(&mut self, config: DetectorConfig) {
        for tracker in [
            &mut self.prelim_tracker,
            &mut self.initial_tracker,
            &mut self.fine_tracker,
        ] {
            tracker.set_config(config.tracker.clone());
        }
        self.max_trials = config.max_trials;
        self.config = config;
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    /// Gives the gradient field back.
    pub fn into_field(self) -> GradientField {
        self.field
    }

    /// Outcome of the last single probe detection.
    pub fn result(&self) -> ResultCode {
        self.result
    }

    /// Detections attempted by the last sweep or multi-selection.
    pub fn count_of_trials(&self) -> usize {
        self.trials
    }

    /// Segment limit of the next sweep; dropped to 0 once a sweep ends below
    /// it.
    pub fn max_trials(&self) -> usize {
        self.max_trials
    }

    /// Segment stored for `step` by the last single probe detection.
    ///
    /// Rejected detections keep the segment of the stage that failed, so
    /// this is not necessarily an accepted one; check [`Detector::result`].
    pub fn blurred_segment(&self, step: Step) -> Option<&BlurredSegment> {
        match step {
            Step::Preliminary => self.prelim_bs.as_ref(),
            Step::Initial => self.initial_bs.as_ref(),
            Step::Final => self.final_bs.as_ref(),
        }
    }

    /// Segments of the last sweep or multi-selection.
    pub fn blurred_segments(&self) -> &[BlurredSegment] {
        &self.segments
    }

    /// Moves a stored segment out of the detector.
    pub fn take_blurred_segment(&mut self, step: Step) -> Option<BlurredSegment> {
        match step {
            Step::Preliminary => self.prelim_bs.take(),
            Step::Initial => self.initial_bs.take(),
            Step::Final => self.final_bs.take(),
        }
    }

    /// Moves the sweep segments out of the detector.
    pub fn take_blurred_segments(&mut self) -> Vec<BlurredSegment> {
        std::mem::take(&mut self.segments)
    }

    /// Probe handed to the preliminary or initial pass of the last
    /// detection.
    pub fn scan_input(&self, step: Step) -> Option<ProbeInput> {
        match step {
            Step::Preliminary => self.prelim_input,
            Step::Initial => self.initial_input,
            Step::Final => None,
        }
    }

    /// Scans visited by a pass, when `record_scans` is set.
    pub fn scans(&self, step: Step) -> &[Vec<Point>] {
        match step {
            Step::Preliminary => self.prelim_tracker.scans(),
            Step::Initial => self.initial_tracker.scans(),
            Step::Final => self.fine_tracker.scans(),
        }
    }

    /// Why the last fine track stopped.
    pub fn track_failure(&self) -> TrackFailure {
        self.fine_tracker.failure()
    }

    /// Points dropped by the outlier filter of a step.
    pub fn rejected(&self, step: Step) -> &[Point] {
        match step {
            Step::Final => self.filter.rejected(),
            _ => self.prefilter.rejected(),
        }
    }
}
