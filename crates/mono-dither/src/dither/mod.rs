//! Dithering algorithms for 1-bit output.
//!
//! # Algorithms
//!
//! - **Floyd-Steinberg**: error diffusion, 100% propagation (default)
//! - **Atkinson**: error diffusion, 75% propagation
//! - **Ordered**: 4x4 Bayer threshold matrix
//! - **Threshold**: fixed midpoint, no dithering
//!
//! # Architecture
//!
//! All algorithms implement the [`Dither`] trait. [`DitherMode`] names them
//! for configuration and maps each name to its implementation.
//!
//! # Example
//!
//! ```
//! use mono_dither::dither::{Dither, FloydSteinberg};
//! use mono_dither::GrayImage;
//!
//! let gray = GrayImage::filled(16, 16, 64).unwrap();
//! let bitmap = FloydSteinberg.dither(&gray);
//! assert_eq!(bitmap.dimensions(), (16, 16));
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;
mod mode;
mod ordered;
mod threshold;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG};
pub use mode::{DitherMode, Resolved, UnknownMode};
pub use ordered::{Ordered, BAYER_4};
pub use threshold::Threshold;

use crate::gray::GrayImage;
use crate::output::{MonoBitmap, BLACK, WHITE};

/// Midpoint between black and white: a value is white iff `>= THRESHOLD`.
pub const THRESHOLD: u8 = 128;

/// Trait for 1-bit dithering algorithms.
///
/// Implementations must return a bitmap with exactly the input's geometry.
pub trait Dither {
    /// Reduce `image` to pure black and white.
    fn dither(&self, image: &GrayImage) -> MonoBitmap;
}

/// Quantize a working value to the nearest of black and white.
#[inline]
pub(crate) fn quantize(value: f32) -> u8 {
    if value >= THRESHOLD as f32 {
        WHITE
    } else {
        BLACK
    }
}

/// Error buffer for efficient error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`).
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<f32>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer.
    ///
    /// `row_depth` is the kernel's `max_dy + 1`.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![0.0; width]).collect(),
            width,
        }
    }

    /// Accumulated error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> f32 {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: f32) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the row buffer: the first row is discarded, subsequent rows
    /// shift forward, and a new zeroed row is added at the end.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(0.0);
        }
    }
}

/// Raster-order error diffusion parameterized by kernel.
///
/// Rows are always scanned left to right. Contributions that would land
/// outside the image are dropped, never wrapped.
pub(crate) fn dither_with_kernel(image: &GrayImage, kernel: &Kernel) -> MonoBitmap {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let source = image.pixels();
    let mut output = vec![BLACK; width * height];
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = source[idx] as f32 + error_buf.get_accumulated(x);
            let new = quantize(old);
            output[idx] = new;

            let error = old - new as f32;
            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx < 0 || nx as usize >= width || y + dy as usize >= height {
                    continue;
                }
                error_buf.add_error(nx as usize, dy as usize, error * weight as f32 / divisor);
            }
        }
        error_buf.advance_row();
    }

    MonoBitmap::from_quantized(image.width(), image.height(), output)
}
