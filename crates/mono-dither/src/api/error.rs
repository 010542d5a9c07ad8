//! Unified error type for the mono-dither public API.
//!
//! [`DitherError`] covers every way raw pixel data can fail to describe a
//! valid raster, so callers get a single type for `?` propagation.

use std::fmt;

/// Unified error type for the mono-dither public API.
///
/// # Example
///
/// ```
/// use mono_dither::{DitherError, GrayImage};
///
/// let err = GrayImage::new(3, 3, vec![0; 8]).unwrap_err();
/// assert!(matches!(err, DitherError::Dimension { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// Zero-sized geometry, or a pixel buffer that does not hold exactly
    /// `width * height` samples.
    Dimension {
        width: u32,
        height: u32,
        len: usize,
    },
    /// A monochrome buffer contained a value other than 0 or 255.
    NotBinary { index: usize, value: u8 },
    /// A packed 1-bit buffer had the wrong number of bytes for its geometry.
    PackedLength { expected: usize, actual: usize },
    /// A dither mode name that does not match any algorithm.
    UnknownMode(String),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Dimension { width, height, len } => write!(
                f,
                "invalid raster geometry {}x{} for {} pixels",
                width, height, len
            ),
            DitherError::NotBinary { index, value } => {
                write!(f, "pixel {} has value {}, expected 0 or 255", index, value)
            }
            DitherError::PackedLength { expected, actual } => write!(
                f,
                "packed buffer is {} bytes, expected {}",
                actual, expected
            ),
            DitherError::UnknownMode(name) => write!(f, "unknown dither mode '{}'", name),
        }
    }
}

impl std::error::Error for DitherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_message() {
        let err = DitherError::Dimension {
            width: 4,
            height: 0,
            len: 0,
        };
        assert_eq!(err.to_string(), "invalid raster geometry 4x0 for 0 pixels");
    }

    #[test]
    fn test_not_binary_message() {
        let err = DitherError::NotBinary {
            index: 7,
            value: 128,
        };
        assert_eq!(err.to_string(), "pixel 7 has value 128, expected 0 or 255");
    }

    #[test]
    fn test_unknown_mode_message() {
        let err = DitherError::UnknownMode("halftone".to_string());
        assert_eq!(err.to_string(), "unknown dither mode 'halftone'");
    }
}
