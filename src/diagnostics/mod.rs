//! Serializable reports of detector runs.
//!
//! [`SegmentDescriptor`] snapshots one blurred segment, [`ProbeReport`] one
//! probe detection and [`DetectionReport`] a whole tool run. Sweeps return a
//! [`SweepReport`](crate::detector::SweepReport) carrying a
//! [`TimingBreakdown`].

pub mod pipeline;
pub mod segments;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, ProbeReport};
pub use segments::{DigitalLineDescriptor, SegmentDescriptor};
pub use timing::{StageTiming, TimingBreakdown};

#[cfg(test)]
mod tests;
