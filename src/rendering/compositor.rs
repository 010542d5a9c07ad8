use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::Path;

use crate::error::PipelineError;
use crate::models::TargetGeometry;

/// Padding color around a fitted image.
pub const PAPER_WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Intermediate RGB raster at exactly the target geometry.
pub type CanvasImage = RgbImage;

/// A decoded source image, converted to RGB.
///
/// Alpha is dropped; paletted and grayscale inputs are expanded.
#[derive(Debug, Clone)]
pub struct SourceImage {
    label: String,
    pixels: RgbImage,
}

impl SourceImage {
    pub fn new(label: impl Into<String>, pixels: RgbImage) -> Self {
        Self {
            label: label.into(),
            pixels,
        }
    }

    /// Identifier used in logs and errors (usually the path)
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

/// Read and decode an image file.
pub fn decode_path(path: &Path) -> Result<SourceImage, PipelineError> {
    let bytes = std::fs::read(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&bytes, &path.display().to_string())
}

/// Decode an in-memory image. The format is detected from the content.
pub fn decode_bytes(bytes: &[u8], label: &str) -> Result<SourceImage, PipelineError> {
    let decoded = image::load_from_memory(bytes).map_err(|source| PipelineError::Decode {
        image: label.to_string(),
        source,
    })?;

    tracing::debug!(
        image = label,
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded source image"
    );

    Ok(SourceImage::new(label, decoded.into_rgb8()))
}

/// Size of the source after scaling it to fit inside `geometry`.
///
/// The constrained side matches the target exactly; the other side is
/// rounded and never drops below one pixel.
pub fn fitted_size(width: u32, height: u32, geometry: TargetGeometry) -> (u32, u32) {
    let source_ratio = width as f64 / height as f64;

    if source_ratio > geometry.aspect_ratio() {
        let fitted = (geometry.width as f64 / source_ratio).round() as u32;
        (geometry.width, fitted.clamp(1, geometry.height))
    } else {
        let fitted = (geometry.height as f64 * source_ratio).round() as u32;
        (fitted.clamp(1, geometry.width), geometry.height)
    }
}

/// Scale `source` to fit `geometry` and center it on a white canvas.
///
/// Aspect ratio is preserved and nothing is cropped: the leftover area is
/// letterboxed (top/bottom) or pillarboxed (left/right) in white.
pub fn fit(source: &SourceImage, geometry: TargetGeometry) -> Result<CanvasImage, PipelineError> {
    let (src_w, src_h) = (source.width(), source.height());
    if src_w == 0 || src_h == 0 {
        return Err(PipelineError::Dimension {
            image: source.label().to_string(),
            width: src_w,
            height: src_h,
        });
    }
    geometry.validate()?;

    let (width, height) = fitted_size(src_w, src_h, geometry);
    let offset_x = (geometry.width - width) / 2;
    let offset_y = (geometry.height - height) / 2;

    tracing::debug!(
        image = source.label(),
        src_w,
        src_h,
        width,
        height,
        offset_x,
        offset_y,
        "Fitting image to display"
    );

    let mut canvas = RgbImage::from_pixel(geometry.width, geometry.height, PAPER_WHITE);
    if (width, height) == (src_w, src_h) {
        imageops::replace(&mut canvas, source.pixels(), offset_x as i64, offset_y as i64);
    } else {
        let resized = imageops::resize(source.pixels(), width, height, FilterType::Lanczos3);
        imageops::replace(&mut canvas, &resized, offset_x as i64, offset_y as i64);
    }

    Ok(canvas)
}
