//! Output types for the dithering pipeline.
//!
//! [`MonoBitmap`] is the only output type. It offers two layouts:
//!
//! - **Unpacked** ([`MonoBitmap::pixels`]): one `u8` per pixel, 0 or 255
//! - **Packed** ([`MonoBitmap::to_packed`]): one bit per pixel for PNG
//!   encoding and panel upload

mod mono_bitmap;

pub use mono_bitmap::{MonoBitmap, BLACK, WHITE};
