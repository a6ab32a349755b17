use super::*;
use crate::edges::{FieldConfig, GradientField};
use crate::geometry::{Point, Vector};
use crate::image::ImageU8;

const W: usize = 100;
const H: usize = 64;

/// Light top half, dark from row 32 down.
fn step_data() -> Vec<u8> {
    let mut data = vec![200u8; W * H];
    for v in data.iter_mut().skip(32 * W) {
        *v = 50;
    }
    data
}

fn field_of(data: &[u8]) -> GradientField {
    let img = ImageU8 {
        w: W,
        h: H,
        stride: W,
        data,
    };
    GradientField::new(&img, FieldConfig::default())
}

#[test]
fn fast_track_follows_a_step_edge() {
    let field = field_of(&step_data());
    let mut tracker = Tracker::new(W, H, TrackerConfig::default());
    let bs = tracker
        .fast_track(&field, 3, Point::new(50, 0), Point::new(50, 63))
        .expect("edge crossed by the stroke");
    assert_eq!(bs.center(), Point::new(50, 31));
    assert!(
        bs.all_points().iter().all(|p| p.y == 31),
        "last light row holds the strongest gradient"
    );
    let bb = bs.bounding_box();
    assert_eq!((bb.xmin, bb.xmax), (18, 82), "32 scans on each side");
    assert_eq!(bs.len(), 65);
}

#[test]
fn fast_track_records_scans_on_request() {
    let field = field_of(&step_data());
    let config = TrackerConfig {
        record_scans: true,
        ..TrackerConfig::default()
    };
    let mut tracker = Tracker::new(W, H, config);
    tracker.fast_track(&field, 3, Point::new(50, 0), Point::new(50, 63));
    assert_eq!(tracker.scans().len(), 65);
    assert_eq!(tracker.scan_bounds(false).len(), 65);
    tracker.clear_scans();
    assert!(tracker.scans().is_empty());
}

#[test]
fn fast_track_finds_nothing_on_a_uniform_image() {
    let field = field_of(&vec![128u8; W * H]);
    let mut tracker = Tracker::new(W, H, TrackerConfig::default());
    assert!(tracker
        .fast_track(&field, 3, Point::new(50, 0), Point::new(50, 63))
        .is_none());
}

#[test]
fn short_stroke_gives_no_start() {
    let field = field_of(&step_data());
    let mut tracker = Tracker::new(W, H, TrackerConfig::default());
    assert!(tracker
        .fast_track(&field, 3, Point::new(50, 28), Point::new(50, 33))
        .is_none());
}

#[test]
fn fine_track_runs_to_the_image_borders() {
    let field = field_of(&step_data());
    let mut tracker = Tracker::new(W, H, TrackerConfig::default());
    let gref = field.value(Point::new(50, 31));
    let bs = tracker
        .fine_track(&field, 3, Point::new(50, 31), Vector::new(1, 0), 9, gref)
        .expect("edge along the scan direction");
    assert!(bs.all_points().iter().all(|p| p.y == 31));
    let bb = bs.bounding_box();
    assert_eq!((bb.xmin, bb.xmax), (2, 97), "null gradient on the border");
    assert_eq!(bs.len(), 96);
    let failure = tracker.failure();
    assert!(failure.contains(TrackFailure::IMAGE_BOUND_ON_LEFT));
    assert!(failure.contains(TrackFailure::IMAGE_BOUND_ON_RIGHT));
    assert!(!failure.contains(TrackFailure::NO_START));
    assert!(!failure.contains(TrackFailure::LOST_ORIENTATION));
}

#[test]
fn fine_track_rejects_opposite_gradients() {
    let field = field_of(&step_data());
    let mut tracker = Tracker::new(W, H, TrackerConfig::default());
    let gref = -field.value(Point::new(50, 31));
    let bs = tracker.fine_track(&field, 3, Point::new(50, 31), Vector::new(1, 0), 9, gref);
    assert!(bs.is_none());
    assert_eq!(tracker.failure(), TrackFailure::NO_START);
}

#[test]
fn failure_bits_are_readable() {
    let mut failure = TrackFailure::NONE;
    assert_eq!(failure.to_string(), "none");
    failure.insert(TrackFailure::NO_START);
    failure.insert(TrackFailure::LOST_ORIENTATION);
    assert_eq!(failure.bits(), 33);
    assert_eq!(failure.to_string(), "no start, lost orientation");
}
