use super::*;
use crate::geometry::{Point, Vector};
use std::collections::HashSet;

const W: usize = 40;
const H: usize = 30;

fn inside(p: &Point) -> bool {
    p.x >= 0 && p.y >= 0 && (p.x as usize) < W && (p.y as usize) < H
}

#[test]
fn scans_never_leave_the_image() {
    let provider = ScannerProvider::new(W, H);
    let strokes = [
        (Point::new(5, 3), Point::new(30, 20)),
        (Point::new(30, 20), Point::new(5, 3)),
        (Point::new(2, 28), Point::new(35, 1)),
        (Point::new(20, 0), Point::new(22, 29)),
        (Point::new(20, 29), Point::new(17, 0)),
        (Point::new(0, 15), Point::new(39, 15)),
        (Point::new(10, 10), Point::new(10, 20)),
        (Point::new(3, 3), Point::new(25, 25)),
    ];
    for ortho in [false, true] {
        let provider = provider.with_ortho(ortho);
        for (p1, p2) in strokes {
            let mut scanner = provider
                .for_stroke(p1, p2)
                .expect("non-null stroke gives a scanner");
            assert!(scanner.first().iter().all(inside));
            for _ in 0..200 {
                let left = scanner.next_on_left();
                let right = scanner.next_on_right();
                assert!(
                    left.iter().all(inside) && right.iter().all(inside),
                    "scan outside the image for {p1:?} -> {p2:?} (ortho {ortho})"
                );
            }
            assert!(scanner.next_on_left().is_empty());
            assert!(scanner.next_on_right().is_empty());
        }
    }
}

#[test]
fn scan_lines_tile_the_strip() {
    let provider = ScannerProvider::new(W, H);
    let mut scanner = provider
        .for_stroke(Point::new(5, 3), Point::new(30, 20))
        .expect("scanner");
    let mut seen = HashSet::new();
    let mut scans = vec![scanner.first()];
    for _ in 0..60 {
        scans.push(scanner.next_on_left());
        scans.push(scanner.next_on_right());
    }
    for p in scans.into_iter().flatten() {
        assert!(seen.insert(p), "pixel {p:?} visited twice");
    }
}

#[test]
fn vertical_stroke_scans_full_columns() {
    let provider = ScannerProvider::new(100, 64);
    let mut scanner = provider
        .for_stroke(Point::new(10, 0), Point::new(10, 63))
        .expect("scanner");
    assert_eq!(scanner.octant(), Octant::SteepDown);
    let first = scanner.first();
    assert_eq!(first.len(), 64);
    assert_eq!(first[0], Point::new(10, 0));
    assert!(first.iter().all(|p| p.x == 10));
    assert!(scanner.next_on_right().iter().all(|p| p.x == 11));
    assert!(scanner.next_on_left().iter().all(|p| p.x == 9));
    assert_eq!(provider.for_stroke(Point::new(4, 4), Point::new(4, 4)).map(|_| ()), None);
}

#[test]
fn centred_scan_spans_the_requested_length() {
    let provider = ScannerProvider::new(100, 64);
    let scanner = provider
        .for_center(Point::new(50, 30), Vector::new(0, -5), 8, false)
        .expect("scanner");
    let first = scanner.first();
    assert_eq!(first.len(), 9);
    assert_eq!(first.first(), Some(&Point::new(50, 26)));
    assert_eq!(first.last(), Some(&Point::new(50, 34)));
}

#[test]
fn bind_to_rescales_the_strip_width() {
    let provider = ScannerProvider::new(100, 64);
    let mut scanner = provider
        .for_center(Point::new(50, 30), Vector::new(0, 64), 8, true)
        .expect("scanner");
    assert_eq!(scanner.first().len(), 9);

    // Same direction, unit normal: width kept.
    scanner.bind_to(0, 1, 30);
    let scan = scanner.next_on_right();
    assert_eq!(scan.len(), 9);
    assert_eq!(scan[0], Point::new(51, 26));

    // Diagonal normal: L1 norm grows twice as fast as L∞, width doubles.
    scanner.bind_to(1, 1, 80);
    let scan = scanner.next_on_right();
    assert!(scan.iter().all(|p| p.x == 52));
    assert_eq!(scan.len(), 17);
    assert_eq!(scan[0], Point::new(52, 20));

    // Static scanners ignore re-binding.
    let mut fixed = provider
        .for_center(Point::new(50, 30), Vector::new(0, 64), 8, false)
        .expect("scanner");
    fixed.bind_to(1, 1, 80);
    assert_eq!(fixed.next_on_right().len(), 9);
}

#[test]
fn locate_inverts_the_line_layout() {
    let provider = ScannerProvider::new(100, 64);
    let mut scanner = provider
        .for_center(Point::new(50, 30), Vector::new(0, 7), 8, false)
        .expect("scanner");
    assert_eq!(
        scanner.locate(Point::new(53, 28)),
        ScanPosition { line: 3, offset: -2 }
    );
    for _ in 0..2 {
        scanner.next_on_left();
    }
    let scan = scanner.next_on_left();
    let pos = scanner.locate(scan[0]);
    assert_eq!(pos.line, -3);

    let mut oblique = provider
        .for_stroke(Point::new(10, 10), Point::new(40, 25))
        .expect("scanner");
    oblique.next_on_right();
    let scan = oblique.next_on_right();
    for p in scan {
        assert_eq!(oblique.locate(p).line, 2, "pixel {p:?}");
    }
}

#[test]
fn ortho_scans_are_axis_parallel() {
    let provider = ScannerProvider::new(30, 30).with_ortho(true);
    let scanner = provider
        .for_stroke(Point::new(0, 0), Point::new(20, 10))
        .expect("scanner");
    let first = scanner.first();
    assert_eq!(first.len(), 23);
    assert!(first.iter().all(|p| p.y == 5));
    assert_eq!(first[0], Point::new(0, 5));
}
