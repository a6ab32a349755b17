use super::maxima::{keep_contrasted_max, search_local_max, sort_by_magnitude};
use super::*;
use crate::geometry::{Point, Vector};
use crate::image::ImageU8;

fn step_image() -> (usize, usize, Vec<u8>) {
    let (w, h) = (20usize, 20usize);
    let mut data = vec![200u8; w * h];
    for y in 10..h {
        for x in 0..w {
            data[y * w + x] = 50;
        }
    }
    (w, h, data)
}

fn column(x: i32, h: i32) -> Vec<Point> {
    (0..h).map(|y| Point::new(x, y)).collect()
}

#[test]
fn plateau_peak_is_reported_at_its_middle() {
    let signal = [0, 500, 100, 600, 600, 600, 0];
    assert_eq!(search_local_max(&signal, 400), vec![1, 4]);
    assert_eq!(search_local_max(&signal, 550), vec![4]);
}

#[test]
fn contrast_pruning_matches_golden_outputs() {
    let signal = [0, 500, 450, 600, 0];
    let mut peaks = vec![1, 3];
    keep_contrasted_max(&mut peaks, &signal, 100);
    assert_eq!(peaks, vec![3], "shallow left summit is dropped");

    let signal = [0, 500, 300, 600, 0];
    let mut peaks = vec![1, 3];
    keep_contrasted_max(&mut peaks, &signal, 100);
    assert_eq!(peaks, vec![1, 3]);

    // The right pond is compared against the highest summit seen so far.
    let signal = [0, 900, 200, 850, 800, 820, 0];
    let mut peaks = search_local_max(&signal, 0);
    assert_eq!(peaks, vec![1, 3, 5]);
    keep_contrasted_max(&mut peaks, &signal, 100);
    assert_eq!(peaks, vec![1, 3]);
}

#[test]
fn magnitude_sort_is_stable() {
    let signal = [5, 9, 5, 9, 1];
    let mut peaks = vec![0, 1, 2, 3, 4];
    sort_by_magnitude(&mut peaks, &signal);
    assert_eq!(peaks, vec![1, 3, 0, 2, 4]);
}

#[test]
fn step_edge_is_found_on_a_column() {
    let (w, h, data) = step_image();
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: &data,
    };
    let field = GradientField::new(&img, FieldConfig::default());
    assert_eq!(field.magnitude_threshold(), 400);
    assert_eq!(field.value(Point::new(10, 9)), Vector::new(0, -12600));
    assert_eq!(field.magnitude(Point::new(10, 8)), 5400);

    let pix = column(10, h as i32);
    assert_eq!(field.largest_in(&pix), Some(9));
    assert_eq!(field.local_max(&pix), vec![9]);
    assert_eq!(field.local_max_directed(&pix, Vector::new(0, -1)), vec![9]);
    assert!(
        field.local_max_directed(&pix, Vector::new(0, 1)).is_empty(),
        "opposite gradient must be rejected"
    );
    assert!(field.local_max_directed(&pix, Vector::new(1, 0)).is_empty());
}

#[test]
fn uniform_run_has_no_largest_pixel() {
    let data = vec![128u8; 100];
    let img = ImageU8 {
        w: 10,
        h: 10,
        stride: 10,
        data: &data,
    };
    let field = GradientField::new(&img, FieldConfig::default());
    let pix = column(4, 10);
    assert_eq!(field.largest_in(&pix), None);
    assert!(field.local_max(&pix).is_empty());
}

#[test]
fn mask_dilation_stamps_the_bowl() {
    let (w, h, data) = step_image();
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: &data,
    };
    let mut field = GradientField::new(&img, FieldConfig::default());
    field.set_mask(&[Point::new(10, 10)]);
    assert_eq!(field.masked_count(), 21);
    assert!(!field.is_free(Point::new(12, 9)));
    assert!(field.is_free(Point::new(12, 12)));

    let pix = column(10, h as i32);
    assert!(field.local_max(&pix).is_empty(), "masked peak is skipped");
    assert_eq!(
        field.local_max_directed(&pix, Vector::new(0, -1)),
        vec![9],
        "directed search ignores the mask until masking is on"
    );
    field.set_masking(true);
    assert!(field.local_max_directed(&pix, Vector::new(0, -1)).is_empty());

    field.clear_mask();
    assert_eq!(field.masked_count(), 0);
    assert_eq!(MaskDilation::Cross.offsets().len(), 4);
}

#[test]
fn morphological_kinds_use_their_own_threshold() {
    let (w, h, data) = step_image();
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: &data,
    };
    let config = FieldConfig {
        kind: GradientKind::FullMorpho,
        ..FieldConfig::default()
    };
    let field = GradientField::new(&img, config);
    assert_eq!(field.magnitude_threshold(), 20);
    assert_eq!(field.magnitude(Point::new(10, 9)), 150);
    assert_eq!(field.magnitude(Point::new(10, 10)), 150);
    assert_eq!(field.magnitude(Point::new(10, 5)), 0);
}
