#![allow(clippy::needless_range_loop)]

//! mono-dither: 1-bit dithering for monochrome e-paper panels
//!
//! This library reduces an 8-bit grayscale raster to pure black and white
//! using one of four strategies, and provides the [`MonoBitmap`] type that
//! carries the result to a panel driver or an on-disk cache.
//!
//! # Quick Start
//!
//! ```
//! use mono_dither::{dither, DitherMode, GrayImage};
//!
//! let gray = GrayImage::filled(4, 4, 200).unwrap();
//! let bitmap = dither(&gray, DitherMode::Atkinson);
//!
//! assert_eq!(bitmap.width(), 4);
//! assert_eq!(bitmap.height(), 4);
//! assert!(bitmap.pixels().iter().all(|&v| v == 0 || v == 255));
//! ```
//!
//! # Mode Names
//!
//! Modes arrive as strings from configuration files. [`dither_named()`]
//! never fails on an unknown name: it falls back to Floyd-Steinberg and
//! reports the rejected name in [`Dithered::warning`].
//!
//! ```
//! use mono_dither::{dither_named, DitherMode, GrayImage};
//!
//! let gray = GrayImage::filled(8, 8, 90).unwrap();
//! let result = dither_named(&gray, "halftone");
//!
//! assert_eq!(result.mode, DitherMode::FloydSteinberg);
//! assert_eq!(result.warning.unwrap().requested(), "halftone");
//! ```
//!
//! # Dithering Algorithms
//!
//! | Mode | Family | Error propagated |
//! |------|--------|------------------|
//! | `threshold` | none | 0 |
//! | `ordered` | 4x4 Bayer matrix | 0 |
//! | `floyd-steinberg` | error diffusion | 16/16 |
//! | `atkinson` | error diffusion | 6/8 |
//!
//! Atkinson deliberately discards a quarter of every quantization error.
//! Mid-tones still dither, but near-white and near-black regions collapse to
//! solid white or black, which gives the characteristic high-contrast look.
//!
//! # Output Packing
//!
//! [`MonoBitmap::to_packed()`] produces one bit per pixel, most significant
//! bit first, every row padded to a whole byte, with a set bit meaning white.
//! This is both the scanline layout of a 1-bit grayscale PNG and the frame
//! buffer layout expected by common monochrome panel controllers.

pub mod api;
pub mod dither;
pub mod gray;
pub mod output;


pub use api::{dither, dither_named, DitherError, Dithered};
pub use dither::{Dither, DitherMode, Resolved, UnknownMode, THRESHOLD};
pub use gray::GrayImage;
pub use output::MonoBitmap;
