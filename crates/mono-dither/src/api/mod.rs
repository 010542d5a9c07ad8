//! Public API for the mono-dither crate.
//!
//! [`dither()`] runs a known [`DitherMode`]; [`dither_named()`] accepts a
//! free-form mode name as it appears in configuration and never fails.

mod error;

pub use error::DitherError;

use crate::dither::{DitherMode, UnknownMode};
use crate::gray::GrayImage;
use crate::output::MonoBitmap;

/// Dither `image` with the given mode.
///
/// The result always has the same width and height as the input.
pub fn dither(image: &GrayImage, mode: DitherMode) -> MonoBitmap {
    mode.algorithm().dither(image)
}

/// Output of [`dither_named()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dithered {
    /// The 1-bit result.
    pub bitmap: MonoBitmap,
    /// The mode that actually ran.
    pub mode: DitherMode,
    /// Set when the requested name was unknown and Floyd-Steinberg ran instead.
    pub warning: Option<UnknownMode>,
}

/// Dither `image` with the mode called `name`.
///
/// Unknown names fall back to [`DitherMode::FloydSteinberg`]; the rejected
/// name is reported through [`Dithered::warning`] so the caller can log it.
pub fn dither_named(image: &GrayImage, name: &str) -> Dithered {
    let resolved = DitherMode::resolve(name);
    Dithered {
        bitmap: dither(image, resolved.mode),
        mode: resolved.mode,
        warning: resolved.fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dither_named_known_mode() {
        let img = GrayImage::filled(4, 4, 200).unwrap();
        let result = dither_named(&img, "threshold");
        assert_eq!(result.mode, DitherMode::Threshold);
        assert!(result.warning.is_none());
        assert_eq!(result.bitmap.white_count(), 16);
    }

    #[test]
    fn test_dither_named_unknown_matches_floyd_steinberg() {
        let img = GrayImage::from_fn(9, 7, |x, y| (x * 28 + y * 3) as u8).unwrap();
        let result = dither_named(&img, "not-a-mode");

        assert_eq!(result.mode, DitherMode::FloydSteinberg);
        assert_eq!(result.bitmap, dither(&img, DitherMode::FloydSteinberg));
        assert_eq!(result.warning.unwrap().requested(), "not-a-mode");
    }
}
