//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! Originally developed by Bill Atkinson for the Apple Macintosh, it keeps
//! highlights and shadows clean at the cost of some tonal range.

use crate::gray::GrayImage;
use crate::output::MonoBitmap;

use super::{quantize, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// Pixels are visited in row-major order, skipping the last two columns
/// and the last two rows. Each visited pixel is quantized and `error / 8`
/// is added to six neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Neighbors outside the image are skipped. Because the scan stops two
/// pixels short of the right and bottom edges, every neighbor write other
/// than bottom-left in column 0 lands in bounds.
///
/// The skipped border pixels are not diffused: once the scan finishes they
/// are clamped to `[0, 255]` and thresholded, keeping whatever error reached
/// them.
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &GrayImage) -> MonoBitmap {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut buffer = image.to_f32();
        let mut output = vec![0u8; width * height];
        let divisor = ATKINSON.divisor as f32;

        for y in 0..height.saturating_sub(2) {
            for x in 0..width.saturating_sub(2) {
                let idx = y * width + x;
                let old = buffer[idx];
                let new = quantize(old);
                output[idx] = new;

                let error = (old - new as f32) / divisor;
                for &(dx, dy, weight) in ATKINSON.entries {
                    let nx = x as i32 + dx;
                    let ny = y + dy as usize;
                    if nx < 0 || nx as usize >= width || ny >= height {
                        continue;
                    }
                    buffer[ny * width + nx as usize] += error * weight as f32;
                }
            }
        }

        // Border pixels: threshold only
        for y in 0..height {
            for x in 0..width {
                if y + 2 < height && x + 2 < width {
                    continue;
                }
                let idx = y * width + x;
                output[idx] = quantize(buffer[idx].clamp(0.0, 255.0));
            }
        }

        MonoBitmap::from_quantized(image.width(), image.height(), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::{FloydSteinberg, Threshold};
    use crate::output::{BLACK, WHITE};

    #[test]
    fn test_all_white_stays_white() {
        let img = GrayImage::filled(12, 9, 255).unwrap();
        assert_eq!(Atkinson.dither(&img).white_count(), 12 * 9);
    }

    #[test]
    fn test_all_black_stays_black() {
        let img = GrayImage::filled(12, 9, 0).unwrap();
        assert_eq!(Atkinson.dither(&img).black_count(), 12 * 9);
    }

    #[test]
    fn test_tiny_image_is_pure_threshold() {
        // 2x2 has no interior pixels; everything is border
        let img = GrayImage::new(2, 2, vec![127, 128, 200, 10]).unwrap();
        assert_eq!(
            Atkinson.dither(&img),
            Threshold.dither(&img),
            "No pixel should receive diffused error"
        );
    }

    #[test]
    fn test_border_keeps_accumulated_error() {
        // 3x3: only (0,0) is interior. It goes black with +120 error, giving
        // 15 to (1,0), (2,0), (0,1), (1,1), (0,2); (-1,1) is out of bounds.
        // 120 + 15 = 135 -> white even though a plain threshold says black.
        let img = GrayImage::filled(3, 3, 120).unwrap();
        let result = Atkinson.dither(&img);

        assert_eq!(result.get(0, 0), BLACK);
        for (x, y) in [(1, 0), (2, 0), (0, 1), (1, 1), (0, 2)] {
            assert_eq!(result.get(x, y), WHITE, "({x},{y}) should receive error");
        }
        for (x, y) in [(2, 1), (1, 2), (2, 2)] {
            assert_eq!(result.get(x, y), BLACK, "({x},{y}) is out of reach");
        }
    }

    #[test]
    fn test_overflow_is_clamped_not_wrapped() {
        // Accumulated error above 255 must still read as white
        let img = GrayImage::new(3, 3, vec![100, 255, 255, 255, 255, 255, 255, 255, 255]).unwrap();
        let result = Atkinson.dither(&img);
        assert_eq!(result.black_count(), 1);
        assert_eq!(result.get(0, 0), BLACK);
    }

    #[test]
    fn test_near_white_collapses_to_white() {
        // With 25% of the error discarded, the accumulated error for a flat
        // 240 field settles at -45 and never drags a pixel below 128.
        let img = GrayImage::filled(32, 32, 240).unwrap();
        assert_eq!(Atkinson.dither(&img).black_count(), 0);
    }

    #[test]
    fn test_discards_more_highlight_detail_than_floyd_steinberg() {
        let img = GrayImage::filled(32, 32, 240).unwrap();
        let atkinson = Atkinson.dither(&img);
        let floyd = FloydSteinberg.dither(&img);
        assert!(
            floyd.black_count() > atkinson.black_count(),
            "Floyd-Steinberg keeps full error and must place some black dots"
        );
    }

    #[test]
    fn test_mid_gray_dithers() {
        let img = GrayImage::filled(32, 32, 128).unwrap();
        let result = Atkinson.dither(&img);
        let ratio = result.white_count() as f32 / 1024.0;
        assert!(
            (0.3..=0.7).contains(&ratio),
            "Mid-gray should produce a mixed pattern, got {ratio}"
        );
    }
}
