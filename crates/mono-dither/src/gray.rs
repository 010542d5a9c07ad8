//! Single-channel 8-bit raster, the input of every dithering algorithm.

use crate::api::DitherError;

/// Row-major grayscale raster with values in `0..=255`.
///
/// The geometry is fixed at construction and always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Wrap an existing pixel buffer.
    ///
    /// Fails with [`DitherError::Dimension`] if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DitherError> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
            return Err(DitherError::Dimension {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Uniform image of a single gray level.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, DitherError> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> u8,
    ) -> Result<Self, DitherError> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
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

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Pixels as `f32`, the working representation for error diffusion.
    pub(crate) fn to_f32(&self) -> Vec<f32> {
        self.pixels.iter().map(|&v| v as f32).collect()
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
