//! Raster stages of the pipeline: decode, fit, enhance, grayscale, and the
//! 1-bit PNG artifact codec.

pub mod compositor;
pub mod enhance;
pub mod mono_png;

pub use compositor::{decode_bytes, decode_path, fit, fitted_size, CanvasImage, SourceImage};
pub use enhance::{enhance, luminance, to_grayscale};
pub use mono_png::{decode_mono_png, encode_mono_png};
