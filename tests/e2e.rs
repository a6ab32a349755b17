mod common;

use blurred_segments::detector::{Detector, DetectorConfig, ResultCode, Step};
use blurred_segments::edges::FieldConfig;
use blurred_segments::geometry::{AbsRat, Point};
use blurred_segments::image::ImageU8;
use blurred_segments::tracker::TrackFailure;
use common::synthetic_image::{
    parallel_strokes_u8, reference_stroke_u8, uniform_u8, HEIGHT, WIDTH,
};

fn detector_on(buffer: &[u8]) -> Detector {
    let image = ImageU8::new(WIDTH, HEIGHT, buffer).expect("buffer matches the image size");
    Detector::from_image(&image, FieldConfig::default(), DetectorConfig::default())
}

#[test]
fn vertical_stroke_finds_the_upper_edge() {
    let _ = env_logger::builder().is_test(true).try_init();
    let buffer = reference_stroke_u8();
    let mut detector = detector_on(&buffer);

    let res = detector.detect(Point::new(50, 0), Point::new(50, HEIGHT as i32 - 1));
    assert_eq!(res, ResultCode::Ok, "stroke across the ink: {res}");

    let bs = detector
        .blurred_segment(Step::Final)
        .expect("accepted segment");
    assert!(
        bs.all_points().iter().all(|p| (28..=29).contains(&p.y)),
        "segment stays on the upper edge of the stroke"
    );
    let bb = bs.bounding_box();
    // Ink spans columns 10..=90; the corner columns fail the orientation gate.
    assert!(
        (9..=11).contains(&bb.xmin) && (89..=91).contains(&bb.xmax),
        "x range {}..{}",
        bb.xmin,
        bb.xmax
    );
    assert!(
        bs.minimal_width().less_eq(&AbsRat::from_int(3)),
        "width within the assigned thickness"
    );
}

#[test]
fn stroke_on_the_ink_corner_has_no_fine_start() {
    let buffer = reference_stroke_u8();
    let mut detector = detector_on(&buffer);

    // The initial pass centres on the corner pixel (10, 29), whose diagonal
    // gradient is too far from the reference direction to seed the fine pass.
    let res = detector.detect(Point::new(10, 0), Point::new(10, HEIGHT as i32 - 1));
    assert_eq!(res, ResultCode::FinalNoDetection, "{res}");
    assert_eq!(res.step(), Some(Step::Final));
    assert_eq!(detector.track_failure(), TrackFailure::NO_START);
    let initial = detector
        .blurred_segment(Step::Initial)
        .expect("initial pass succeeded");
    assert_eq!(initial.center(), Point::new(10, 29));
}

#[test]
fn stroke_just_inside_the_ink_is_accepted() {
    let buffer = reference_stroke_u8();
    let mut detector = detector_on(&buffer);

    let res = detector.detect(Point::new(11, 0), Point::new(11, HEIGHT as i32 - 1));
    assert_eq!(res, ResultCode::Ok, "{res}");
    assert!(!detector.track_failure().contains(TrackFailure::NO_START));

    let bs = detector
        .blurred_segment(Step::Final)
        .expect("accepted segment");
    assert!(bs.minimal_width().less_eq(&AbsRat::from_int(3)));
    assert!(bs.all_points().iter().all(|p| (27..=30).contains(&p.y)));
    let bb = bs.bounding_box();
    assert!(
        bb.xmin <= 11 && bb.xmin >= 9 && bb.xmax >= 85 && bb.xmax <= 91,
        "x range {}..{}",
        bb.xmin,
        bb.xmax
    );
}

#[test]
fn degenerate_stroke_is_void() {
    let buffer = reference_stroke_u8();
    let mut detector = detector_on(&buffer);
    let p = Point::new(50, 30);
    assert_eq!(detector.detect(p, p), ResultCode::Void);
    assert_eq!(detector.result(), ResultCode::Undetermined);
    assert!(detector.blurred_segment(Step::Final).is_none());
    assert!(detector.blurred_segment(Step::Initial).is_none());
}

#[test]
fn sweep_on_a_uniform_image_is_empty() {
    let buffer = uniform_u8(WIDTH, HEIGHT, 128);
    let mut detector = detector_on(&buffer);
    let report = detector.detect_all();
    assert_eq!(report.segments, 0);
    assert!(detector.blurred_segments().is_empty());
}

#[test]
fn sweep_is_deterministic() {
    let buffer = reference_stroke_u8();
    let mut detector = detector_on(&buffer);
    detector.detect_all();
    let first: Vec<Vec<Point>> = detector
        .take_blurred_segments()
        .iter()
        .map(|bs| bs.all_points())
        .collect();
    assert!(!first.is_empty(), "the stroke edges are found");

    detector.detect_all();
    let second: Vec<Vec<Point>> = detector
        .blurred_segments()
        .iter()
        .map(|bs| bs.all_points())
        .collect();
    assert_eq!(first, second);

    let mut fresh = detector_on(&buffer);
    fresh.detect_all();
    let third: Vec<Vec<Point>> = fresh
        .blurred_segments()
        .iter()
        .map(|bs| bs.all_points())
        .collect();
    assert_eq!(first, third);
}

#[test]
fn sweep_segments_do_not_overlap() {
    let buffer = reference_stroke_u8();
    let mut detector = detector_on(&buffer);
    detector.detect_all();
    let segments = detector.blurred_segments();
    for (i, a) in segments.iter().enumerate() {
        let pa = a.all_points();
        for b in &segments[i + 1..] {
            assert!(
                b.all_points().iter().all(|p| !pa.contains(p)),
                "masked pixels are not detected twice"
            );
        }
    }
    assert!(detector.count_of_trials() >= segments.len());
}

#[test]
fn close_parallel_strokes_give_a_thin_segment_on_one_band() {
    let y0 = 30;
    for gap in 0..=3 {
        let buffer = parallel_strokes_u8(WIDTH, HEIGHT, y0, gap);
        let mut detector = detector_on(&buffer);
        let res = detector.detect(Point::new(50, 0), Point::new(50, HEIGHT as i32 - 1));
        assert_eq!(res, ResultCode::Ok, "gap {gap}: {res}");

        let bs = detector
            .blurred_segment(Step::Final)
            .expect("accepted segment");
        assert!(
            bs.minimal_width().less_eq(&AbsRat::from_int(3)),
            "gap {gap}: merged strokes would exceed the assigned thickness"
        );
        let bb = bs.bounding_box();
        assert!(
            bb.ymax - bb.ymin <= 2,
            "gap {gap}: rows {}..{} span more than one edge",
            bb.ymin,
            bb.ymax
        );
        assert!(
            bb.ymin >= y0 as i32 - 3 && bb.ymax <= (y0 + gap) as i32 + 3,
            "gap {gap}: rows {}..{} off the strokes",
            bb.ymin,
            bb.ymax
        );
        assert!(bb.xmax - bb.xmin >= 40, "gap {gap}: segment runs along the strokes");
    }
}
