use super::*;
use crate::geometry::{AbsRat, Point};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn point_list_keeps_left_to_right_order() {
    let mut list = BiPtList::new(p(5, 5));
    list.add_front(p(4, 5));
    list.add_front(p(3, 5));
    for x in 6..9 {
        list.add_back(p(x, 5));
    }
    assert_eq!(list.len(), 6);
    assert_eq!(list.seed(), p(5, 5));
    assert_eq!((list.front_len(), list.back_len()), (2, 3));
    assert_eq!(list.left_points(), vec![p(4, 5), p(3, 5)]);
    assert_eq!(list.right_points(), vec![p(6, 5), p(7, 5), p(8, 5)]);

    list.remove_back(10);
    assert_eq!(list.back(), p(6, 5), "the point next to the seed survives");
    list.remove_front(1);
    assert_eq!(list.front(), p(4, 5));
    assert_eq!(list.seed(), p(5, 5));
    let bb = list.extrema();
    assert_eq!((bb.xmin, bb.xmax, bb.ymin, bb.ymax), (4, 6, 5, 5));
}

#[test]
fn lone_seed_gives_no_segment() {
    let builder = SegmentBuilder::new(AbsRat::from_int(3), p(2, 2));
    assert!(builder.line().is_none());
    assert!(builder.into_segment().is_none());
}

#[test]
fn two_points_give_a_thin_segment() {
    let mut builder = SegmentBuilder::new(AbsRat::from_int(3), p(0, 0));
    assert!(builder.add_right(p(5, 2)));
    assert_eq!(builder.state(), &BuilderState::OneSide);
    let bs = builder.into_segment().expect("two distinct points");
    assert_eq!(bs.all_points(), vec![p(0, 0), p(5, 2)]);
    assert_eq!(bs.segment().nu(), 1, "thin line");
    assert!(bs.antipodal().is_none());
    assert!(!bs.is_thick());
}

#[test]
fn builder_walks_through_its_states() {
    let mut builder = SegmentBuilder::new(AbsRat::from_int(2), p(0, 0));
    assert!(builder.add_right(p(1, 0)));
    assert_eq!(builder.state(), &BuilderState::OneSide);
    assert!(builder.add_left(p(-1, 0)));
    assert_eq!(builder.state(), &BuilderState::Flat);
    assert_eq!(builder.strict_thickness(), AbsRat::ZERO);

    builder.remove_right(1);
    assert_eq!(builder.len(), 3, "no removal before the hull exists");

    assert!(builder.add_right(p(2, 1)));
    assert!(matches!(builder.state(), BuilderState::Hull(_)));
    let width = builder.strict_thickness();
    assert!(width.equals(&AbsRat::new(2, 3)), "got {width}");
}

#[test]
fn refused_point_leaves_builder_untouched() {
    let mut builder = SegmentBuilder::new(AbsRat::from_int(2), p(0, 0));
    assert!(builder.add_right(p(1, 0)));
    assert!(builder.add_left(p(-1, 0)));
    assert!(builder.add_right(p(2, 1)));

    let state = builder.state().clone();
    let support = builder.support_vector();
    let len = builder.len();
    assert!(!builder.add_left(p(-3, 5)), "far point must be refused");
    assert_eq!(builder.state(), &state, "hull restored exactly");
    assert_eq!(builder.support_vector(), support);
    assert_eq!(builder.len(), len);
    assert_eq!(builder.last_left(), p(-1, 0));

    assert!(builder.add_right(p(3, 1)));
    assert!(builder.strict_thickness().less_eq(&builder.max_width()));
    assert_eq!(builder.last_right(), p(3, 1));

    let bs = builder.into_segment().expect("hull state");
    assert_eq!(bs.len(), 5);
    assert!(bs.antipodal().is_some());
    assert!(bs.minimal_width().equals(&AbsRat::from_int(1)));
    let line = *bs.segment().line();
    for q in bs.all_points() {
        assert!(line.owns(q), "{q:?} outside {line:?}");
    }
}

#[test]
fn replay_stops_each_side_at_first_refusal() {
    let left = [p(4, 0), p(3, 0), p(2, 3), p(1, 0)];
    let right = [p(6, 0), p(7, 0)];
    let builder = SegmentBuilder::from_sides(AbsRat::from_int(1), p(5, 0), &left, &right);
    assert_eq!(builder.state(), &BuilderState::Flat);
    assert_eq!(
        builder.points().to_vec(),
        vec![p(3, 0), p(4, 0), p(5, 0), p(6, 0), p(7, 0)]
    );
}

fn band_segment() -> BlurredSegment {
    let left: Vec<Point> = (0..5).rev().map(|x| p(x, 0)).collect();
    let right: Vec<Point> = (6..11).map(|x| p(x, 1)).collect();
    SegmentBuilder::from_sides(AbsRat::from_int(2), p(5, 0), &left, &right)
        .into_segment()
        .expect("band segment")
}

#[test]
fn blurred_segment_accessors() {
    let bs = band_segment();
    assert_eq!(bs.len(), 11);
    assert_eq!(bs.center(), p(5, 0));
    assert_eq!(bs.last_left(), p(0, 0));
    assert_eq!(bs.last_right(), p(10, 1));
    assert_eq!(bs.squared_length(), 101);
    assert_eq!(bs.middle(), p(5, 0));
    assert_eq!(bs.bounding_box_size(), crate::geometry::Vector::new(10, 1));
    assert!(bs.minimal_width().equals(&AbsRat::from_int(1)));
    assert_eq!(bs.left_points().len(), 5);
    assert_eq!(bs.right_points().first(), Some(&p(6, 1)));
    let line = bs.line();
    assert!((line.x * line.x + line.y * line.y - 1.0).abs() < 1e-9);
    assert!((bs.length() - 101f64.sqrt()).abs() < 1e-9);
    assert!(bs.direction()[0] > 0.99);
}

#[test]
fn connected_runs_are_counted() {
    let bs = band_segment();
    assert_eq!(bs.split_into_runs().len(), 1);
    assert_eq!(bs.count_of_connected_points(5), 11);

    let gapped = SegmentBuilder::from_sides(
        AbsRat::from_int(1),
        p(5, 0),
        &[p(4, 0), p(3, 0)],
        &[p(7, 0), p(8, 0), p(9, 0)],
    )
    .into_segment()
    .expect("flat segment");
    assert_eq!(gapped.split_into_runs().len(), 2);
    assert_eq!(gapped.connected_components().len(), 2);
    assert_eq!(gapped.count_of_connected_points(3), 6);
    assert_eq!(gapped.count_of_connected_points(4), 0);
    assert_eq!(gapped.count_of_connected_components(2), 2);
}

#[test]
fn filter_keeps_a_clean_segment() {
    let bs = band_segment();
    let mut filter = OutlierFilter::new();
    let out = filter.filter(&bs).expect("filtered segment");
    assert_eq!(out.all_points(), bs.all_points());
    assert_eq!(filter.initial_size(), 11);
    assert_eq!(filter.final_size(), 11);
    assert!(filter.rejected().is_empty());
}
