//! Detector configuration.
//!
//! Every knob of the acceptance pipeline lives in one immutable
//! [`DetectorConfig`]; a detector is built with one and can be handed a new
//! one as a whole. Defaults reproduce the usual behaviour: initial pass
//! budget `3 + 2`, minimum size 5, final minimum size 10, recentering and
//! initial density test on, sweep step 15.

use crate::tracker::TrackerConfig;
use serde::{Deserialize, Serialize};

/// Lowest accepted minimum segment size.
pub const ABSOLUTE_MIN_SIZE: usize = 3;

/// Gradient polarity the fine track follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Follow the gradient found at the seed, whatever its sign. Sweeps run
    /// one detection per candidate.
    #[default]
    Stroke,
    /// Same polarity as the seed gradient. Sweeps also try the opposite one.
    Forward,
    /// Opposite polarity.
    Backward,
}

impl EdgeDirection {
    /// Numeric identity: 0, 1 and -1.
    pub fn code(self) -> i32 {
        match self {
            EdgeDirection::Stroke => 0,
            EdgeDirection::Forward => 1,
            EdgeDirection::Backward => -1,
        }
    }
}

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Width budget of the fine track.
    pub assigned_thickness: i32,
    /// Extra width granted to the preliminary and initial passes.
    pub fast_track_margin: i32,
    /// Minimum number of points of every intermediate segment.
    pub min_size: usize,
    /// Undirected pass re-centring a rough probe before the initial one.
    pub preliminary: bool,
    /// Outlier filter on the initial segment.
    pub prefilter: bool,
    /// Outlier filter on the final segment.
    pub filter: bool,
    pub edge_direction: EdgeDirection,
    /// Start the fine track where the initial segment crosses the probe.
    pub recentering: bool,
    /// Fine budget derived from the initial segment width.
    pub fitting: bool,
    /// Initial segment point count against the span it covers on the probe.
    pub density_test: bool,
    /// Final segment point count against its span, for short spans.
    pub final_density_test: bool,
    /// Final segment point count against three times its width.
    pub final_length_test: bool,
    pub final_size_test: bool,
    pub final_min_size: usize,
    /// Half of the points must lie in connected runs of `connected_min_size`.
    pub connected_components_test: bool,
    pub connected_min_size: usize,
    /// Selections run every candidate of the stroke, like a sweep.
    pub multi_selection: bool,
    /// Distance between two sweep strokes.
    pub sweep_step: i32,
    /// Stop a sweep after this many segments, 0 for no limit.
    pub max_trials: usize,
    pub tracker: TrackerConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            assigned_thickness: 3,
            fast_track_margin: 2,
            min_size: 5,
            preliminary: false,
            prefilter: false,
            filter: false,
            edge_direction: EdgeDirection::Stroke,
            recentering: true,
            fitting: false,
            density_test: true,
            final_density_test: false,
            final_length_test: false,
            final_size_test: true,
            final_min_size: 10,
            connected_components_test: false,
            connected_min_size: 5,
            multi_selection: false,
            sweep_step: 15,
            max_trials: 0,
            tracker: TrackerConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Minimum size actually applied, never below [`ABSOLUTE_MIN_SIZE`].
    pub fn effective_min_size(&self) -> usize {
        self.min_size.max(ABSOLUTE_MIN_SIZE)
    }

    /// Width budget of the preliminary and initial passes.
    pub fn fast_track_width(&self) -> i32 {
        self.assigned_thickness + self.fast_track_margin
    }

    /// Sweep step, at least one pixel.
    pub fn effective_sweep_step(&self) -> i32 {
        self.sweep_step.max(1)
    }
}
