#![allow(dead_code)]

pub const WIDTH: usize = 100;
pub const HEIGHT: usize = 64;
pub const BACKGROUND: u8 = 220;
pub const INK: u8 = 30;

/// Light image with a dark horizontal band on rows `y0..y0+thickness`,
/// columns `x0..=x1`.
pub fn stroke_u8(
    width: usize,
    height: usize,
    y0: usize,
    thickness: usize,
    x0: usize,
    x1: usize,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(y0 + thickness <= height, "stroke must fit in the image");
    assert!(x0 <= x1 && x1 < width, "stroke must fit in the image");

    let mut img = vec![BACKGROUND; width * height];
    for y in y0..y0 + thickness {
        for v in &mut img[y * width + x0..=y * width + x1] {
            *v = INK;
        }
    }
    img
}

/// The reference scene: a 3 pixel wide stroke on rows 29 to 31 spanning
/// columns 10 to 90.
pub fn reference_stroke_u8() -> Vec<u8> {
    stroke_u8(WIDTH, HEIGHT, 29, 3, 10, 90)
}

pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// Two one pixel wide strokes separated by `gap` light rows, the first on
/// row `y0`.
pub fn parallel_strokes_u8(width: usize, height: usize, y0: usize, gap: usize) -> Vec<u8> {
    let mut img = stroke_u8(width, height, y0, 1, 10, width - 11);
    let second = stroke_u8(width, height, y0 + gap + 1, 1, 10, width - 11);
    for (v, s) in img.iter_mut().zip(second) {
        *v = (*v).min(s);
    }
    img
}
