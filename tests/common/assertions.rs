//! Assertion helpers for tests.

use mono_dither::MonoBitmap;
use pretty_assertions::assert_eq;

/// Assert bitmap contains only pure black and white
pub fn assert_binary(bitmap: &MonoBitmap) {
    if let Some((i, v)) = bitmap
        .pixels()
        .iter()
        .enumerate()
        .find(|&(_, &v)| v != 0 && v != 255)
    {
        panic!("Pixel {i} has gray value {v}");
    }
}

/// Assert the given rows are entirely white
pub fn assert_white_rows(bitmap: &MonoBitmap, rows: std::ops::Range<u32>) {
    for y in rows {
        for x in 0..bitmap.width() {
            assert!(bitmap.is_white(x, y), "pixel ({x},{y}) should be padding");
        }
    }
}

/// Assert the given rows are entirely black
pub fn assert_black_rows(bitmap: &MonoBitmap, rows: std::ops::Range<u32>) {
    for y in rows {
        for x in 0..bitmap.width() {
            assert!(!bitmap.is_white(x, y), "pixel ({x},{y}) should be image");
        }
    }
}

/// Assert an artifact on disk is a 1-bit PNG of the given size
pub fn assert_mono_png(path: &std::path::Path, width: u32, height: u32) {
    let file = std::fs::File::open(path).expect("artifact should exist");
    let reader = png::Decoder::new(std::io::BufReader::new(file))
        .read_info()
        .expect("artifact should be a PNG");
    let info = reader.info();
    assert_eq!((info.width, info.height), (width, height));
    assert_eq!(info.bit_depth, png::BitDepth::One);
}
