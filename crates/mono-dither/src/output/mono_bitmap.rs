//! MonoBitmap: the pure black/white result of dithering.
//!
//! [`MonoBitmap`] keeps one byte per pixel restricted to 0 and 255, which is
//! convenient for inspection and comparison, and converts to and from the
//! packed 1-bit layout used by PNG scanlines and panel frame buffers.

use crate::api::DitherError;

/// Pixel value for black.
pub const BLACK: u8 = 0;
/// Pixel value for white.
pub const WHITE: u8 = 255;

/// The canonical output of the dithering pipeline.
///
/// Every pixel is exactly [`BLACK`] or [`WHITE`]; the constructors enforce
/// this, so a `MonoBitmap` never contains intermediate gray values.
///
/// # Example
///
/// ```
/// use mono_dither::MonoBitmap;
///
/// let bitmap = MonoBitmap::from_binary(2, 2, vec![0, 255, 255, 0]).unwrap();
/// assert_eq!(bitmap.white_count(), 2);
///
/// // One byte per row: 0b0100_0000 and 0b1000_0000
/// assert_eq!(bitmap.to_packed(), vec![0x40, 0x80]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBitmap {
    /// Row-major pixels, each 0 or 255.
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl MonoBitmap {
    /// Build from dithering output that is already known to be binary.
    pub(crate) fn from_quantized(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count must match {}x{}",
            width,
            height,
        );
        debug_assert!(pixels.iter().all(|&v| v == BLACK || v == WHITE));
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Wrap a one-byte-per-pixel buffer, validating geometry and values.
    pub fn from_binary(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DitherError> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
            return Err(DitherError::Dimension {
                width,
                height,
                len: pixels.len(),
            });
        }
        if let Some((index, &value)) = pixels
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != BLACK && v != WHITE)
        {
            return Err(DitherError::NotBinary { index, value });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Unpack a 1-bit buffer (MSB first, rows padded to whole bytes, set bit
    /// = white). Padding bits are ignored.
    pub fn from_packed(width: u32, height: u32, packed: &[u8]) -> Result<Self, DitherError> {
        if width == 0 || height == 0 {
            return Err(DitherError::Dimension {
                width,
                height,
                len: 0,
            });
        }
        let row_bytes = Self::row_bytes(width);
        let expected = row_bytes * height as usize;
        if packed.len() != expected {
            return Err(DitherError::PackedLength {
                expected,
                actual: packed.len(),
            });
        }

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in packed.chunks(row_bytes) {
            for x in 0..width as usize {
                let bit = (row[x / 8] >> (7 - (x % 8))) & 1;
                pixels.push(if bit == 1 { WHITE } else { BLACK });
            }
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Uniform bitmap, handy for placeholders and tests.
    pub fn solid(width: u32, height: u32, white: bool) -> Self {
        let value = if white { WHITE } else { BLACK };
        Self::from_quantized(width, height, vec![value; width as usize * height as usize])
    }

    /// Number of bytes in one packed row.
    #[inline]
    pub fn row_bytes(width: u32) -> usize {
        (width as usize).div_ceil(8)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixels, each 0 or 255.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the bitmap.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == WHITE
    }

    pub fn white_count(&self) -> usize {
        self.pixels.iter().filter(|&&v| v == WHITE).count()
    }

    pub fn black_count(&self) -> usize {
        self.pixels.len() - self.white_count()
    }

    /// Pack to one bit per pixel, MSB first, rows padded to whole bytes.
    ///
    /// The buffer has length `row_bytes(width) * height`.
    pub fn to_packed(&self) -> Vec<u8> {
        let row_bytes = Self::row_bytes(self.width);
        let mut packed = vec![0u8; row_bytes * self.height as usize];

        for (row_in, row_out) in self
            .pixels
            .chunks(self.width as usize)
            .zip(packed.chunks_mut(row_bytes))
        {
            for (x, &value) in row_in.iter().enumerate() {
                if value == WHITE {
                    row_out[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        packed
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
