//! Incremental convex hull of a point run grown at both ends, with the
//! vertex/edge pairs realising its minimal vertical and horizontal widths.
//!
//! Insertions are transactional: [`ConvexHull::insert`] returns a
//! [`HullInsertion`] that rolls the hull back on drop unless committed.

mod antipodal;
mod convex;

pub use antipodal::{Antipodal, Axis};
pub use convex::{ConvexHull, HullInsertion};

#[cfg(test)]
mod tests;
