//! Integer plane geometry used throughout the detector.
//!
//! - [`Point`] / [`Vector`]: pixel coordinates and displacements with exact
//!   `i64` dot and cross products.
//! - [`AbsRat`]: non-negative fraction compared by cross-multiplication, so
//!   width and height tests never go through floating point.
//! - Step patterns: Bresenham-like boolean runs describing how a digital line
//!   advances along its minor axis.
//!
//! Image coordinates: `x` grows to the right, `y` grows with the row index.

mod absrat;
mod point;

pub use absrat::AbsRat;
pub use point::{BoundingBox, Point, Vector};
