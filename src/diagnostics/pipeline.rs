use crate::detector::{ResultCode, SweepReport};
use crate::diagnostics::{SegmentDescriptor, TimingBreakdown};
use crate::geometry::Point;
use crate::tracker::TrackFailure;
use serde::Serialize;

/// Outcome of one probe detection.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    pub p1: Point,
    pub p2: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    pub result: ResultCode,
    pub code: i32,
    pub failure: TrackFailure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentDescriptor>,
}

/// Everything a detection run produced, as written by the command line tool.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub version: String,
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub probes: Vec<ProbeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepReport>,
    pub segments: Vec<SegmentDescriptor>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub path: String,
    pub width: usize,
    pub height: usize,
}
