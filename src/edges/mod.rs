//! Gradient field: per-pixel gradient vectors, magnitudes and an occupancy
//! mask, built once per image.
//!
//! - Kernels: 3×3 / 5×5 Sobel, or morphological top-hat, black-hat and
//!   gradient over small structuring elements (see [`GradientKind`]).
//! - Candidate search: [`GradientField::local_max`] treats the magnitudes of a
//!   scan line as a 1D signal, keeps the peaks rising above the threshold,
//!   prunes weakly contrasted ones and masked ones, and sorts the rest by
//!   decreasing magnitude. [`GradientField::local_max_directed`] filters by
//!   agreement with a reference gradient instead of contrast.
//! - Mask: accepted pixels are stamped with a small dilation so later probes
//!   skip them.
//!
//! All decisions use integer arithmetic; dot and squared-cosine tests replace
//! angles.

pub mod grad;
mod field;
mod maxima;
pub mod morpho;

pub use field::{FieldConfig, GradientField, GradientKind, MaskDilation};

#[cfg(test)]
mod tests;
