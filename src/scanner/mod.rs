//! Directional scanners.
//!
//! A scanner walks a strip of the image with parallel digital scan lines,
//! starting from a central line and moving outwards on its left and right
//! sides one line per call. Four direction families ([`Octant`]) cover all
//! directions once normalised; the [`ScannerProvider`] picks the family from
//! the direction and clips every scan to the image rectangle.
//!
//! Adaptive scanners can be re-bound to a new strip (the medial axis of a
//! growing segment), rescaling the strip width to the new direction.

mod directional;
mod octant;
mod provider;

pub use directional::{DirectionalScanner, ScanPosition};
pub use octant::Octant;
pub use provider::ScannerProvider;

#[cfg(test)]
mod tests;
