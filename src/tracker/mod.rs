//! Segment growth along scan lines.
//!
//! A [`Tracker`] couples a directional scanner, the gradient field and a
//! [`SegmentBuilder`](crate::segments::SegmentBuilder) to grow one blurred
//! segment:
//!
//! - [`Tracker::fast_track`] scans a stroke, starts from the strongest pixel
//!   of the central scan and greedily adds the strongest pixel of each
//!   following scan, on both sides, within a bounded number of scans.
//! - [`Tracker::fine_track`] scans across a known direction, tries the ranked
//!   local maxima of each scan in order, re-binds the scan strip on the
//!   segment's own medial axis once it is long enough, can abort when the
//!   segment turns crosswise, and tightens the width budget once the width
//!   has been stable for a while.
//!
//! Both return `None` when the central scan is shorter than [`MIN_SCAN`]
//! pixels.

mod fast;
mod fine;

use crate::geometry::Point;
use crate::scanner::ScannerProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest scan carrying a reliable direction estimate.
pub const MIN_SCAN: usize = 8;

/// Growth settings shared by both tracks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Consecutive scans without an accepted point before a side stops.
    pub accepted_lacks: usize,
    /// Fast track: refuse candidates far from the last point of their side.
    pub proximity_constraint: bool,
    /// Manhattan distance used by the proximity constraint.
    pub proximity_threshold: i32,
    /// Fast track: maximal number of scans on each side.
    pub max_scan: usize,
    /// Fine track: re-bind the scan strip on the segment's medial axis.
    pub dynamic_scans: bool,
    /// Scans to wait before the first re-binding.
    pub fitting_delay: usize,
    /// Fine track on static scans: abort when the segment turns crosswise.
    pub track_crosswise: bool,
    /// Fine track: tighten the width budget once the width is stable.
    pub thickness_control: bool,
    /// Stable scans required before tightening.
    pub thickness_control_delay: usize,
    /// Axis-parallel scan lines.
    pub ortho_scans: bool,
    /// Keep every visited scan for inspection.
    pub record_scans: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            accepted_lacks: 5,
            proximity_constraint: false,
            proximity_threshold: 10,
            max_scan: 32,
            dynamic_scans: true,
            fitting_delay: 20,
            track_crosswise: false,
            thickness_control: true,
            thickness_control_delay: 20,
            ortho_scans: false,
            record_scans: false,
        }
    }
}

/// Reasons why the last fine track stopped, as a bit set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackFailure(u8);

impl TrackFailure {
    pub const NONE: TrackFailure = TrackFailure(0);
    /// No usable start point, or the segment never grew past three points.
    pub const NO_START: TrackFailure = TrackFailure(1);
    pub const IMAGE_BOUND_ON_RIGHT: TrackFailure = TrackFailure(2);
    pub const IMAGE_BOUND_ON_LEFT: TrackFailure = TrackFailure(4);
    pub const LOST_ORIENTATION: TrackFailure = TrackFailure(32);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: TrackFailure) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: TrackFailure) {
        self.0 |= other.0;
    }
}

impl fmt::Display for TrackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names = [
            (Self::NO_START, "no start"),
            (Self::IMAGE_BOUND_ON_RIGHT, "image bound on right"),
            (Self::IMAGE_BOUND_ON_LEFT, "image bound on left"),
            (Self::LOST_ORIENTATION, "lost orientation"),
        ];
        let parts: Vec<&str> = names
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Grows blurred segments on one image.
#[derive(Clone, Debug)]
pub struct Tracker {
    config: TrackerConfig,
    provider: ScannerProvider,
    failure: TrackFailure,
    scans: Vec<Vec<Point>>,
    last_left_scan: usize,
    last_right_scan: usize,
}

impl Tracker {
    /// Tracker for a `width × height` image.
    pub fn new(width: usize, height: usize, config: TrackerConfig) -> Self {
        let provider = ScannerProvider::new(width, height).with_ortho(config.ortho_scans);
        Self {
            config,
            provider,
            failure: TrackFailure::NONE,
            scans: Vec::new(),
            last_left_scan: 0,
            last_right_scan: 0,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TrackerConfig) {
        self.provider = self.provider.with_ortho(config.ortho_scans);
        self.config = config;
    }

    /// Failure bits of the last fine track.
    pub fn failure(&self) -> TrackFailure {
        self.failure
    }

    /// Scans visited since the last [`clear_scans`](Self::clear_scans),
    /// recorded only when `record_scans` is set.
    pub fn scans(&self) -> &[Vec<Point>] {
        &self.scans
    }

    /// First (`right == false`) or last pixel of every recorded scan.
    pub fn scan_bounds(&self, right: bool) -> Vec<Point> {
        self.scans
            .iter()
            .filter_map(|scan| if right { scan.last() } else { scan.first() })
            .copied()
            .collect()
    }

    pub fn clear_scans(&mut self) {
        self.scans.clear();
    }

    /// Index of the last fine-track iteration that accepted a point on the
    /// left and on the right side.
    pub fn last_accepted_scans(&self) -> (usize, usize) {
        (self.last_left_scan, self.last_right_scan)
    }

    fn record(&mut self, scan: &[Point]) {
        if self.config.record_scans {
            self.scans.push(scan.to_vec());
        }
    }
}

#[cfg(test)]
mod tests;
