#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod segments;

// Building blocks of the detector, public for tools and experiments.
pub mod digital;
pub mod edges;
pub mod geometry;
pub mod hull;
pub mod scanner;
pub mod tracker;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{Detector, DetectorConfig, EdgeDirection, ResultCode, Step};
pub use crate::edges::{FieldConfig, GradientField};
pub use crate::geometry::Point;
pub use crate::segments::BlurredSegment;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use blurred_segments::prelude::*;
///
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let mut det = Detector::from_image(&img, FieldConfig::default(), DetectorConfig::default());
/// let res = det.detect(Point::new(32, 0), Point::new(32, 47));
/// assert!(!res.is_ok());
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{
        BlurredSegment, Detector, DetectorConfig, FieldConfig, Point, ResultCode, Step,
    };
}
