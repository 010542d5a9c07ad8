//! Source image fixtures.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Write a solid-color image; the format follows the file extension.
pub fn write_solid(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .expect("Failed to write fixture");
    path
}

/// Write a diagonal ramp covering most of the luminance range.
pub fn write_ramp(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x + y) * 255 / (width + height - 2)) as u8;
        Rgb([v, v, 255 - v])
    })
    .save(&path)
    .expect("Failed to write fixture");
    path
}

/// Encode a solid image to bytes in the given format.
pub fn encode_solid(width: u32, height: u32, color: [u8; 3], format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
        .write_to(&mut std::io::Cursor::new(&mut bytes), format)
        .expect("Failed to encode fixture");
    bytes
}

/// Write bytes that no decoder accepts.
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\xff\xd8\xff\xe0 this is not really a jpeg").unwrap();
    path
}

/// Move a file's modification time `secs` seconds past now.
pub fn touch_future(path: &Path, secs: u64) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::now() + Duration::from_secs(secs))
        .unwrap();
}
