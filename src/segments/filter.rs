use super::builder::SegmentBuilder;
use super::segment::BlurredSegment;
use crate::geometry::{AbsRat, Point};

/// Re-validates a grown segment by replaying its points through a fresh
/// builder around the same seed.
///
/// The budget is one pixel plus the integer part of the segment's own digital
/// width. Each side is replayed from the seed outwards and stops at its first
/// refused point.
#[derive(Clone, Debug, Default)]
pub struct OutlierFilter {
    initial_size: usize,
    final_size: usize,
    rejected: Vec<Point>,
}

impl OutlierFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.initial_size = 0;
        self.final_size = 0;
        self.rejected.clear();
    }

    pub fn filter(&mut self, bs: &BlurredSegment) -> Option<BlurredSegment> {
        let left = bs.left_points();
        let right = bs.right_points();
        let width = bs.minimal_width();
        let max_width = 1 + width.floor().unwrap_or(0);
        let builder =
            SegmentBuilder::from_sides(AbsRat::from_int(max_width), bs.center(), &left, &right);
        self.initial_size = bs.len();
        self.final_size = builder.len();
        let kept = builder.points();
        let (kept_left, kept_right) = (kept.front_len(), kept.back_len());
        self.rejected = left
            .iter()
            .skip(kept_left)
            .chain(right.iter().skip(kept_right))
            .copied()
            .collect();
        builder.into_segment()
    }

    /// Size of the last filtered segment.
    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Points kept by the last replay.
    pub fn final_size(&self) -> usize {
        self.final_size
    }

    /// Points the last replay refused or never reached.
    pub fn rejected(&self) -> &[Point] {
        &self.rejected
    }
}
