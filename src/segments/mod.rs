//! Blurred segment growth and the frozen result.
//!
//! A [`SegmentBuilder`] accepts pixels at either end of a run while keeping
//! the run inside a strip of bounded width. It walks through four stages:
//!
//! - `Seed`: a single point, any neighbour is accepted.
//! - `OneSide`: points on one side of the seed only; the next point is
//!   checked by its rational height above the chord joining both ends.
//! - `Flat`: points on both sides, still collinear.
//! - `Hull`: the first off-line point creates a [`ConvexHull`]; every further
//!   insertion is a hull transaction rolled back when the strict thickness
//!   exceeds the budget.
//!
//! [`SegmentBuilder::into_segment`] consumes the builder and hands its point
//! list over to an immutable [`BlurredSegment`], enclosed in the digital
//! straight segment derived from the antipodal pair (or a thin one for flat
//! runs).
//!
//! Width measures
//! - strict thickness: hull width, tested on each insertion;
//! - digital thickness: `nu / period` of the enclosing digital line;
//! - width budget: builder setting, can be tightened while growing.
//!
//! [`OutlierFilter`] replays a finished segment through a fresh builder to
//! drop points a tighter strip would refuse.
//!
//! [`ConvexHull`]: crate::hull::ConvexHull

mod builder;
mod filter;
mod point_list;
mod segment;

pub use builder::{BuilderState, SegmentBuilder};
pub use filter::OutlierFilter;
pub use point_list::BiPtList;
pub use segment::BlurredSegment;

#[cfg(test)]
mod tests;
