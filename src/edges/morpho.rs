//! Morphological gradients over small structuring elements.
use crate::image::{ImageU8, ImageView};
use rayon::prelude::*;

/// Structuring element, as offsets subtracted from the current pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strucel {
    /// Centre plus its 4-neighbours.
    Plus,
    /// Centre with its upper and lower neighbours.
    Hor,
    /// Centre with its left and right neighbours.
    Ver,
}

impl Strucel {
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Strucel::Plus => &[(0, 0), (0, 1), (-1, 0), (1, 0), (0, -1)],
            Strucel::Hor => &[(0, 0), (0, 1), (0, -1)],
            Strucel::Ver => &[(0, 0), (1, 0), (-1, 0)],
        }
    }
}

/// Which morphological difference to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphoOp {
    /// `in - erosion`
    TopHat,
    /// `dilation - in`
    BlackHat,
    /// `dilation - erosion`
    Gradient,
}

/// Applies `op` with structuring element `se`; out-of-image samples are skipped.
pub fn morpho_gradient(img: &ImageU8, se: Strucel, op: MorphoOp) -> Vec<i32> {
    let (w, h) = (img.width(), img.height());
    let mut out = vec![0i32; w * h];
    if w == 0 {
        return out;
    }
    out.par_chunks_mut(w).enumerate().for_each(|(j, row)| {
        for (i, cell) in row.iter_mut().enumerate() {
            let mut lo: Option<i32> = None;
            let mut hi = 0i32;
            for &(ox, oy) in se.offsets() {
                let x = i as i32 - ox;
                let y = j as i32 - oy;
                if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
                    continue;
                }
                let v = img.row(y as usize)[x as usize] as i32;
                lo = Some(lo.map_or(v, |m| m.min(v)));
                hi = hi.max(v);
            }
            let centre = img.row(j)[i] as i32;
            let lo = lo.unwrap_or(centre);
            *cell = match op {
                MorphoOp::TopHat => centre - lo,
                MorphoOp::BlackHat => hi - centre,
                MorphoOp::Gradient => hi - lo,
            };
        }
    });
    out
}
