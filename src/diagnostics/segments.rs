use crate::geometry::Point;
use crate::segments::BlurredSegment;
use serde::{Deserialize, Serialize};

/// Arithmetical description of the digital straight segment of a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalLineDescriptor {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub nu: i32,
    pub period: i32,
}

/// Geometry snapshot of a detected blurred segment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDescriptor {
    pub size: usize,
    pub center: Point,
    pub left: Point,
    pub right: Point,
    pub direction: [f64; 2],
    pub length: f64,
    pub line: [f64; 3],
    pub dss: DigitalLineDescriptor,
    /// Minimal vertical or horizontal width as `[num, den]`.
    pub width: [i64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antipodal: Option<[Point; 3]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
}

impl SegmentDescriptor {
    pub fn from_segment(bs: &BlurredSegment, with_points: bool) -> Self {
        let dss = bs.segment().line();
        let width = bs.minimal_width();
        let line = bs.line();
        Self {
            size: bs.len(),
            center: bs.center(),
            left: bs.last_left(),
            right: bs.last_right(),
            direction: bs.direction(),
            length: bs.length(),
            line: [line.x, line.y, line.z],
            dss: DigitalLineDescriptor {
                a: dss.a(),
                b: dss.b(),
                c: dss.c(),
                nu: dss.nu(),
                period: dss.period(),
            },
            width: [width.numerator(), width.denominator()],
            antipodal: bs.antipodal().map(|(s, e, v)| [s, e, v]),
            points: if with_points {
                bs.all_points()
            } else {
                Vec::new()
            },
        }
    }
}
