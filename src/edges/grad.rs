//! Integer Sobel gradients.
//!
//! - 3×3 kernel with a one pixel null border.
//! - 5×5 kernel (weights `5 8 10 8 5` on the outer columns, `4 10 20 10 4` on
//!   the inner ones) with a two pixel null border.
//!
//! Rows are independent and computed in parallel.
use crate::geometry::Vector;
use crate::image::{ImageU8, ImageView};
use rayon::prelude::*;

const OUTER: [i32; 5] = [5, 8, 10, 8, 5];
const INNER: [i32; 5] = [4, 10, 20, 10, 4];

#[inline]
fn px(row: &[u8], x: usize) -> i32 {
    row[x] as i32
}

/// 3×3 Sobel vectors, `(gx, gy)` with `y` growing downwards.
pub fn sobel_3x3(img: &ImageU8) -> Vec<Vector> {
    let (w, h) = (img.width(), img.height());
    let mut map = vec![Vector::default(); w * h];
    if w < 3 || h < 3 {
        return map;
    }
    map.par_chunks_mut(w)
        .enumerate()
        .skip(1)
        .take(h - 2)
        .for_each(|(y, out)| {
            let (up, mid, down) = (img.row(y - 1), img.row(y), img.row(y + 1));
            for x in 1..w - 1 {
                let gx = px(up, x + 1) + 2 * px(mid, x + 1) + px(down, x + 1)
                    - px(up, x - 1)
                    - 2 * px(mid, x - 1)
                    - px(down, x - 1);
                let gy = px(down, x - 1) + 2 * px(down, x) + px(down, x + 1)
                    - px(up, x - 1)
                    - 2 * px(up, x)
                    - px(up, x + 1);
                out[x] = Vector::new(gx, gy);
            }
        });
    map
}

/// 5×5 Sobel vectors.
pub fn sobel_5x5(img: &ImageU8) -> Vec<Vector> {
    let (w, h) = (img.width(), img.height());
    let mut map = vec![Vector::default(); w * h];
    if w < 5 || h < 5 {
        return map;
    }
    map.par_chunks_mut(w)
        .enumerate()
        .skip(2)
        .take(h - 4)
        .for_each(|(y, out)| {
            let rows = [
                img.row(y - 2),
                img.row(y - 1),
                img.row(y),
                img.row(y + 1),
                img.row(y + 2),
            ];
            for x in 2..w - 2 {
                let mut gx = 0;
                let mut gy = 0;
                for k in 0..5 {
                    let r = rows[k];
                    gx += OUTER[k] * (px(r, x + 2) - px(r, x - 2))
                        + INNER[k] * (px(r, x + 1) - px(r, x - 1));
                    let c = x + k - 2;
                    gy += OUTER[k] * (px(rows[4], c) - px(rows[0], c))
                        + INNER[k] * (px(rows[3], c) - px(rows[1], c));
                }
                out[x] = Vector::new(gx, gy);
            }
        });
    map
}

/// Integer euclidean norm of each vector.
pub fn magnitudes(map: &[Vector]) -> Vec<i32> {
    map.par_iter()
        .map(|v| (v.norm2() as f64).sqrt() as i32)
        .collect()
}
