//! Tone adjustments applied to the fitted canvas, and grayscale conversion.
//!
//! Each adjustment blends the canvas with a reference image:
//!
//! | Adjustment | Reference | Factor 0 gives |
//! |------------|-----------|----------------|
//! | contrast | flat image at the mean luminance | uniform gray |
//! | brightness | black | black |
//! | sharpness | Gaussian-blurred copy | blurred image |
//!
//! A factor of exactly 1.0 returns the canvas unchanged, so those passes are
//! skipped outright.

use image::imageops;
use image::Rgb;
use mono_dither::{DitherError, GrayImage};

use super::CanvasImage;
use crate::models::ProcessingParameters;

/// Blur radius of the sharpness reference image.
pub const SHARPEN_SIGMA: f32 = 1.0;

/// Apply contrast, brightness and sharpness, in that order.
pub fn enhance(canvas: &mut CanvasImage, params: &ProcessingParameters) {
    if params.contrast != 1.0 {
        adjust_contrast(canvas, params.contrast);
        tracing::debug!(factor = params.contrast, "Applied contrast");
    }
    if params.brightness != 1.0 {
        adjust_brightness(canvas, params.brightness);
        tracing::debug!(factor = params.brightness, "Applied brightness");
    }
    if params.sharpness != 1.0 {
        adjust_sharpness(canvas, params.sharpness);
        tracing::debug!(factor = params.sharpness, "Applied sharpness");
    }
}

/// Scale every channel away from (or towards) the mean luminance.
pub fn adjust_contrast(canvas: &mut CanvasImage, factor: f32) {
    let mean = mean_luminance(canvas) as f32;
    for pixel in canvas.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = blend(mean, *channel, factor);
        }
    }
}

/// Scale every channel, clamped to `[0, 255]`.
pub fn adjust_brightness(canvas: &mut CanvasImage, factor: f32) {
    for pixel in canvas.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = blend(0.0, *channel, factor);
        }
    }
}

/// Move every channel away from a blurred copy: factors above 1.0 sharpen,
/// factors below 1.0 soften.
pub fn adjust_sharpness(canvas: &mut CanvasImage, factor: f32) {
    let blurred = imageops::blur(&*canvas, SHARPEN_SIGMA);
    for (pixel, reference) in canvas.pixels_mut().zip(blurred.pixels()) {
        for (channel, &base) in pixel.0.iter_mut().zip(reference.0.iter()) {
            *channel = blend(base as f32, *channel, factor);
        }
    }
}

/// `base + factor * (value - base)`, rounded and clamped.
#[inline]
fn blend(base: f32, value: u8, factor: f32) -> u8 {
    (base + factor * (value as f32 - base)).round().clamp(0.0, 255.0) as u8
}

/// ITU-R 601 luma with integer rounding.
#[inline]
pub fn luminance(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Mean luminance rounded to the nearest integer.
fn mean_luminance(canvas: &CanvasImage) -> u8 {
    let count = canvas.width() as u64 * canvas.height() as u64;
    if count == 0 {
        return 0;
    }
    let sum: u64 = canvas.pixels().map(|p| luminance(p) as u64).sum();
    ((sum + count / 2) / count) as u8
}

/// Reduce the canvas to a single luminance channel.
pub fn to_grayscale(canvas: &CanvasImage) -> Result<GrayImage, DitherError> {
    GrayImage::new(
        canvas.width(),
        canvas.height(),
        canvas.pixels().map(luminance).collect(),
    )
}
