//! Floyd-Steinberg error diffusion dithering algorithm.

use crate::gray::GrayImage;
use crate::output::MonoBitmap;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// The classic algorithm and the default mode. Pixels are visited in plain
/// row-major order (no serpentine scan). Each pixel is quantized to black or
/// white and the full residual is pushed to four unvisited neighbors:
///
/// ```text
///        X   7
///    3   5   1     (/16)
/// ```
///
/// Neighbors outside the image are skipped, so a little error is lost along
/// the right and bottom edges.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &GrayImage) -> MonoBitmap {
        dither_with_kernel(image, &FLOYD_STEINBERG)
    }
}
