use super::*;
use crate::geometry::{AbsRat, Point};

/// Hull of the two-row band `y = x mod 2` for `x` in `-2..=9`.
fn band_hull() -> ConvexHull {
    let mut hull = ConvexHull::new(Point::new(0, 0), Point::new(1, 1), Point::new(2, 0))
        .expect("non-collinear triangle");
    for x in 3..=9 {
        hull.add_point(Point::new(x, x.rem_euclid(2)), false);
    }
    for x in [-1, -2] {
        hull.add_point(Point::new(x, x.rem_euclid(2)), true);
    }
    hull
}

#[test]
fn collinear_triangle_has_no_hull() {
    assert!(ConvexHull::new(Point::new(0, 0), Point::new(2, 1), Point::new(4, 2)).is_none());
}

#[test]
fn triangle_thickness_uses_the_thinnest_axis() {
    let hull = ConvexHull::new(Point::new(0, 0), Point::new(5, 2), Point::new(10, 0))
        .expect("non-collinear triangle");
    assert!(hull.thickness().equals(&AbsRat::new(2, 1)), "got {}", hull.thickness());
    let (s, e, v) = hull.antipodal_edge_and_vertex().expect("pair");
    assert_eq!(v, Point::new(5, 2));
    assert_eq!(s.y, 0);
    assert_eq!(e.y, 0);
    assert_eq!(hull.antipodal().map(|p| p.axis), Some(Axis::Vertical));
}

#[test]
fn band_keeps_unit_thickness_and_drops_collinear_vertices() {
    let hull = band_hull();
    assert!(hull.thickness().equals(&AbsRat::new(1, 1)), "got {}", hull.thickness());
    assert_eq!(hull.len(), 4, "vertices: {:?}", hull.vertices());
    assert_eq!(hull.left_end(), Point::new(-2, 0));
    assert_eq!(hull.right_end(), Point::new(9, 1));
}

#[test]
fn point_on_the_hull_leaves_it_untouched() {
    let mut hull = band_hull();
    let before = hull.clone();
    let insertion = hull.insert(Point::new(5, 1), false);
    assert!(!insertion.inserted());
    insertion.commit();
    assert_eq!(hull, before);
}

#[test]
fn dropped_insertion_restores_the_hull_exactly() {
    let mut hull = band_hull();
    let before = hull.clone();
    {
        let insertion = hull.insert(Point::new(10, 3), false);
        assert!(insertion.inserted());
        assert!(
            insertion.thickness().greater_than(&AbsRat::new(1, 1)),
            "widening point must increase thickness"
        );
    }
    assert_eq!(hull, before, "rollback must be bit-identical");

    let insertion = hull.insert(Point::new(10, 0), false);
    assert!(insertion.inserted());
    insertion.commit();
    assert_eq!(hull.right_end(), Point::new(10, 0));
    assert!(hull.thickness().equals(&AbsRat::new(1, 1)));
}

/// Minimal width along `axis` over every ring edge, by exhaustive search.
fn exhaustive_width(hull: &ConvexHull, axis: Axis) -> Option<AbsRat> {
    let ring = hull.vertices();
    let h = ring.len();
    let mut best: Option<AbsRat> = None;
    for k in 0..h {
        let (a, b) = (ring[k], ring[(k + 1) % h]);
        let e = a.vector_to(b);
        let run = match axis {
            Axis::Vertical => e.x as i64,
            Axis::Horizontal => e.y as i64,
        };
        if run == 0 {
            continue;
        }
        let depth = ring.iter().map(|&v| e.cross(a.vector_to(v))).max().unwrap_or(0);
        let width = AbsRat::new(depth, run);
        if best.map_or(true, |w| width.less_than(&w)) {
            best = Some(width);
        }
    }
    best
}

fn assert_pairs_match(hull: &ConvexHull, context: &str) {
    let ring = hull.vertices();
    for axis in [Axis::Vertical, Axis::Horizontal] {
        let expected = exhaustive_width(hull, axis).expect("hull has a non-parallel edge");
        let pair = hull.antipodal_on(axis).expect("pair");
        assert!(
            pair.width.equals(&expected),
            "{context} {axis:?}: got {} expected {} on {ring:?}",
            pair.width,
            expected
        );
        let k = ring.iter().position(|&p| p == pair.edge_start).expect("edge on the ring");
        assert_eq!(ring[(k + 1) % ring.len()], pair.edge_end, "{context}: not a ring edge");
        assert!(ring.contains(&pair.vertex), "{context}: vertex off the ring");
    }
}

struct Lcg(u64);

impl Lcg {
    fn below(&mut self, n: u64) -> i32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % n) as i32
    }
}

/// Noisy digital line of slope `a / b` grown alternately right and left,
/// optionally transposed so that the run goes along `y`.
fn grow_noisy_run(a: i32, b: i32, noise: u64, transposed: bool, seed: u64) {
    let mut rng = Lcg(seed);
    let at = |x: i32, jitter: i32| {
        let y = (x * a).div_euclid(b) + jitter;
        if transposed {
            Point::new(y, x)
        } else {
            Point::new(x, y)
        }
    };
    let (l, c, r) = (at(-1, 0), at(0, 1), at(1, 0));
    let mut hull = ConvexHull::new(l, c, r).expect("seed triangle is not flat");
    assert_pairs_match(&hull, "seed");
    for k in 2..120 {
        for to_left in [false, true] {
            let x = if to_left { -k } else { k };
            let p = at(x, rng.below(noise + 1));

            let before = hull.clone();
            {
                let far = if transposed {
                    Point::new(p.x + 40, p.y)
                } else {
                    Point::new(p.x, p.y + 40)
                };
                let _rejected = hull.insert(far, to_left);
            }
            assert_eq!(hull, before, "rollback at k={k}");

            hull.add_point(p, to_left);
            assert_pairs_match(&hull, &format!("slope {a}/{b} k={k} left={to_left}"));
        }
    }
}

#[test]
fn incremental_pairs_track_the_minimal_width() {
    let slopes = [(0, 1), (1, 3), (2, 5), (1, 1), (-3, 7), (5, 2), (-7, 4)];
    for (i, &(a, b)) in slopes.iter().enumerate() {
        for noise in [1, 2, 3] {
            grow_noisy_run(a, b, noise, false, 17 + i as u64 * 31 + noise);
            grow_noisy_run(a, b, noise, true, 911 + i as u64 * 7 + noise);
        }
    }
}

#[test]
fn swallowed_pair_edge_is_replaced() {
    // The thin base edge realises the width until a far point removes it.
    let mut hull = ConvexHull::new(Point::new(0, 0), Point::new(3, 1), Point::new(6, 0))
        .expect("non-collinear triangle");
    let (s, e, _) = hull.antipodal_edge_and_vertex().expect("pair");
    assert_eq!((s.y, e.y), (0, 0));
    hull.add_point(Point::new(12, -3), false);
    assert_pairs_match(&hull, "after swallowing");
    assert_eq!(hull.right_end(), Point::new(12, -3));
    hull.add_point(Point::new(-6, 3), true);
    assert_pairs_match(&hull, "after left insertion");
    assert_eq!(hull.left_end(), Point::new(-6, 3));
}
