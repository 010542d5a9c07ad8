//! Ordered dithering with a 4x4 Bayer matrix.
//!
//! Each pixel is compared against a position-dependent threshold taken from
//! the matrix, tiled across the image. No error is carried between pixels,
//! so the result depends only on the pixel value and its coordinates.

use crate::gray::GrayImage;
use crate::output::{MonoBitmap, BLACK, WHITE};

use super::Dither;

/// The 4x4 Bayer index matrix, indexed as `BAYER_4[y % 4][x % 4]`.
pub const BAYER_4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// 4x4 Bayer ordered dithering.
///
/// A pixel with matrix index `i` becomes white iff its gray value exceeds
/// `16 * i + 8`. The thresholds therefore run from 8 to 248 in steps of 16,
/// and a flat field of value `v` turns roughly `v / 256` of its pixels white
/// in a fixed crosshatch pattern.
pub struct Ordered;

impl Ordered {
    /// Threshold for the pixel at `(x, y)`.
    #[inline]
    pub fn threshold_at(x: u32, y: u32) -> u16 {
        BAYER_4[(y % 4) as usize][(x % 4) as usize] as u16 * 16 + 8
    }
}

impl Dither for Ordered {
    fn dither(&self, image: &GrayImage) -> MonoBitmap {
        let width = image.width();
        let pixels = image
            .pixels()
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let (x, y) = (i as u32 % width, i as u32 / width);
                if v as u16 > Ordered::threshold_at(x, y) {
                    WHITE
                } else {
                    BLACK
                }
            })
            .collect();

        MonoBitmap::from_quantized(image.width(), image.height(), pixels)
    }
}
