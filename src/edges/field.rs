use super::grad::{magnitudes, sobel_3x3, sobel_5x5};
use super::maxima::{keep_contrasted_max, search_local_max, sort_by_magnitude};
use super::morpho::{morpho_gradient, MorphoOp, Strucel};
use crate::geometry::{Point, Vector};
use crate::image::{ImageU8, ImageView};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Kernel used to build the gradient field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKind {
    Sobel3x3,
    #[default]
    Sobel5x5,
    /// Top-hat magnitude, 5×5 Sobel direction.
    TopHat,
    /// Black-hat magnitude, 5×5 Sobel direction.
    BlackHat,
    /// Morphological gradient magnitude, 5×5 Sobel direction.
    Morpho,
    /// Top-hat magnitude and top-hat vector from the line elements.
    FullTopHat,
    FullBlackHat,
    FullMorpho,
}

impl GradientKind {
    pub fn is_sobel(self) -> bool {
        matches!(self, GradientKind::Sobel3x3 | GradientKind::Sobel5x5)
    }

    fn morpho_op(self) -> Option<MorphoOp> {
        match self {
            GradientKind::TopHat | GradientKind::FullTopHat => Some(MorphoOp::TopHat),
            GradientKind::BlackHat | GradientKind::FullBlackHat => Some(MorphoOp::BlackHat),
            GradientKind::Morpho | GradientKind::FullMorpho => Some(MorphoOp::Gradient),
            GradientKind::Sobel3x3 | GradientKind::Sobel5x5 => None,
        }
    }

    fn is_full(self) -> bool {
        matches!(
            self,
            GradientKind::FullTopHat | GradientKind::FullBlackHat | GradientKind::FullMorpho
        )
    }
}

/// Neighbourhood stamped around each masked pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskDilation {
    /// Pixel only.
    None,
    /// 4-neighbours.
    Cross,
    /// 8-neighbours.
    Square,
    /// 8-neighbours plus the four pixels at distance 2 on the axes.
    Diamond,
    /// 5×5 disk.
    #[default]
    Bowl,
}

const BOWL: [(i32, i32); 20] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (2, 0),
    (0, 2),
    (-2, 0),
    (0, -2),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl MaskDilation {
    pub fn offsets(self) -> &'static [(i32, i32)] {
        let n = match self {
            MaskDilation::None => 0,
            MaskDilation::Cross => 4,
            MaskDilation::Square => 8,
            MaskDilation::Diamond => 12,
            MaskDilation::Bowl => 20,
        };
        &BOWL[..n]
    }
}

/// Gradient field construction and candidate-search settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub kind: GradientKind,
    /// Base magnitude threshold; squared for the Sobel kernels.
    pub gradient_threshold: i32,
    /// Minimal peak-to-valley rise kept by the contrast pruning.
    pub gradient_resolution: i32,
    /// Minimal squared cosine, in percent, between a candidate gradient and
    /// the reference direction.
    pub angle_threshold: i32,
    /// Reject candidates whose gradient opposes the reference direction.
    pub oriented_gradient: bool,
    pub dilation: MaskDilation,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            kind: GradientKind::default(),
            gradient_threshold: 20,
            gradient_resolution: 100,
            angle_threshold: 80,
            oriented_gradient: true,
            dilation: MaskDilation::default(),
        }
    }
}

/// Per-pixel gradient vectors and magnitudes plus an occupancy mask.
///
/// The field is immutable once built except for the mask, written by
/// accepted detections and read by later candidate searches.
#[derive(Clone, Debug)]
pub struct GradientField {
    width: usize,
    height: usize,
    vectors: Vec<Vector>,
    magnitudes: Vec<i32>,
    mask: Vec<bool>,
    masking: bool,
    magnitude_threshold: i32,
    config: FieldConfig,
}

impl GradientField {
    pub fn new(img: &ImageU8, config: FieldConfig) -> Self {
        let started = Instant::now();
        let (width, height) = (img.width(), img.height());
        let kind = config.kind;
        let (vectors, magnitudes) = match kind.morpho_op() {
            None => {
                let vectors = if kind == GradientKind::Sobel3x3 {
                    sobel_3x3(img)
                } else {
                    sobel_5x5(img)
                };
                let mags = magnitudes(&vectors);
                (vectors, mags)
            }
            Some(op) => {
                let mags = morpho_gradient(img, Strucel::Plus, op);
                let vectors = if kind.is_full() {
                    let hor = morpho_gradient(img, Strucel::Hor, op);
                    let ver = morpho_gradient(img, Strucel::Ver, op);
                    hor.into_iter()
                        .zip(ver)
                        .map(|(x, y)| Vector::new(x, y))
                        .collect()
                } else {
                    sobel_5x5(img)
                };
                (vectors, mags)
            }
        };
        let magnitude_threshold = if kind.is_sobel() {
            config.gradient_threshold * config.gradient_threshold
        } else {
            config.gradient_threshold
        };
        debug!(
            "GradientField::new {:?} {}x{} threshold={} in {:.3} ms",
            kind,
            width,
            height,
            magnitude_threshold,
            started.elapsed().as_secs_f64() * 1000.0
        );
        Self {
            width,
            height,
            vectors,
            magnitudes,
            mask: vec![false; width * height],
            masking: false,
            magnitude_threshold,
            config,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Effective magnitude threshold used by the peak searches.
    #[inline]
    pub fn magnitude_threshold(&self) -> i32 {
        self.magnitude_threshold
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Gradient vector at `p`, which must lie inside the field.
    #[inline]
    pub fn value(&self, p: Point) -> Vector {
        self.vectors[self.index(p)]
    }

    #[inline]
    pub fn magnitude(&self, p: Point) -> i32 {
        self.magnitudes[self.index(p)]
    }

    #[inline]
    pub fn squared_norm(&self, p: Point) -> i64 {
        self.value(p).norm2()
    }

    /// Index of the strongest pixel of `pix` above both the threshold and the
    /// first pixel's magnitude; `None` when there is none or when it is the
    /// last pixel of the run.
    pub fn largest_in(&self, pix: &[Point]) -> Option<usize> {
        let first = pix.first()?;
        let mut gmax = self.magnitude(*first).max(self.magnitude_threshold);
        let mut best = None;
        for (i, p) in pix.iter().enumerate() {
            let g = self.magnitude(*p);
            if g > gmax {
                gmax = g;
                best = Some(i);
            }
        }
        best.filter(|&i| i + 1 != pix.len())
    }

    fn signal(&self, pix: &[Point]) -> Vec<i32> {
        pix.iter().map(|p| self.magnitude(*p)).collect()
    }

    /// Contrasted, unmasked local maxima of the magnitude along `pix`, as
    /// indices into `pix` sorted by decreasing magnitude.
    pub fn local_max(&self, pix: &[Point]) -> Vec<usize> {
        let signal = self.signal(pix);
        let mut peaks = search_local_max(&signal, self.magnitude_threshold);
        keep_contrasted_max(&mut peaks, &signal, self.config.gradient_resolution);
        self.keep_free(pix, &mut peaks);
        sort_by_magnitude(&mut peaks, &signal);
        peaks
    }

    /// Local maxima along `pix` whose gradient agrees with `gref`.
    ///
    /// No contrast pruning is applied; masked pixels are dropped only while
    /// masking is on, opposite gradients only with `oriented_gradient`.
    pub fn local_max_directed(&self, pix: &[Point], gref: Vector) -> Vec<usize> {
        let signal = self.signal(pix);
        let mut peaks = search_local_max(&signal, self.magnitude_threshold);
        if self.masking {
            self.keep_free(pix, &mut peaks);
        }
        if self.config.oriented_gradient {
            swap_retain(&mut peaks, |i| gref.dot(self.value(pix[i])) > 0);
        }
        let angle = self.config.angle_threshold as i64;
        swap_retain(&mut peaks, |i| {
            !gref.squared_cosine_below(self.value(pix[i]), angle, 100)
        });
        sort_by_magnitude(&mut peaks, &signal);
        peaks
    }

    fn keep_free(&self, pix: &[Point], peaks: &mut Vec<usize>) {
        swap_retain(peaks, |i| !self.mask[self.index(pix[i])]);
    }

    /// Enables or disables the occupancy filter of the directed search.
    pub fn set_masking(&mut self, on: bool) {
        self.masking = on;
    }

    #[inline]
    pub fn is_masking(&self) -> bool {
        self.masking
    }

    pub fn clear_mask(&mut self) {
        self.mask.iter_mut().for_each(|m| *m = false);
    }

    /// Marks `pts` and their dilation neighbourhood as occupied.
    pub fn set_mask(&mut self, pts: &[Point]) {
        let offsets = self.config.dilation.offsets();
        for &p in pts {
            if self.contains(p) {
                let idx = self.index(p);
                self.mask[idx] = true;
            }
            for &(dx, dy) in offsets {
                let q = Point::new(p.x + dx, p.y + dy);
                if self.contains(q) {
                    let idx = self.index(q);
                    self.mask[idx] = true;
                }
            }
        }
    }

    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        !self.mask[self.index(p)]
    }

    /// Number of masked pixels.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|m| **m).count()
    }
}

/// Removes the entries failing `keep`, filling holes from the tail.
fn swap_retain<F: Fn(usize) -> bool>(items: &mut Vec<usize>, keep: F) {
    let mut i = 0;
    while i < items.len() {
        if keep(items[i]) {
            i += 1;
        } else {
            items.swap_remove(i);
        }
    }
}
