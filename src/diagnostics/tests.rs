use super::*;
use crate::geometry::{AbsRat, Point};
use crate::segments::SegmentBuilder;

fn band_segment() -> crate::segments::BlurredSegment {
    let left: Vec<Point> = (0..5).rev().map(|x| Point::new(x, 0)).collect();
    let right: Vec<Point> = (6..11).map(|x| Point::new(x, 1)).collect();
    SegmentBuilder::from_sides(AbsRat::from_int(2), Point::new(5, 0), &left, &right)
        .into_segment()
        .expect("band segment")
}

#[test]
fn descriptor_snapshots_a_segment() {
    let bs = band_segment();
    let desc = SegmentDescriptor::from_segment(&bs, false);
    assert_eq!(desc.size, 11);
    assert_eq!((desc.left, desc.right), (Point::new(0, 0), Point::new(10, 1)));
    assert_eq!(desc.width[0], desc.width[1], "unit width");
    assert!(desc.antipodal.is_some());
    assert!(desc.points.is_empty());

    let json = serde_json::to_value(&desc).expect("serializable");
    assert!(json.get("points").is_none(), "empty point list is skipped");
    assert_eq!(json["size"], 11);
    assert!(json.get("dss").and_then(|d| d.get("period")).is_some());

    let full = SegmentDescriptor::from_segment(&bs, true);
    assert_eq!(full.points, bs.all_points());
}

#[test]
fn timing_stages_are_looked_up_by_label() {
    let mut timings = TimingBreakdown::with_total(3.0);
    timings.push("vertical", 1.0);
    timings.push("horizontal", 2.0);
    assert_eq!(timings.stage("horizontal"), Some(2.0));
    assert_eq!(timings.stage("nms"), None);
    let json = serde_json::to_string(&timings).expect("serializable");
    assert!(json.contains("\"totalMs\":3.0"));
    assert!(json.contains("\"elapsedMs\""));
}
