//! Fixed-midpoint thresholding.

use crate::gray::GrayImage;
use crate::output::MonoBitmap;

use super::{quantize, Dither};

/// Plain threshold at [`THRESHOLD`](super::THRESHOLD), no dithering.
///
/// Useful for line art and text, where any dither texture is noise.
pub struct Threshold;

impl Dither for Threshold {
    fn dither(&self, image: &GrayImage) -> MonoBitmap {
        let pixels = image.pixels().iter().map(|&v| quantize(v as f32)).collect();
        MonoBitmap::from_quantized(image.width(), image.height(), pixels)
    }
}
