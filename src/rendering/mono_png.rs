//! 1-bit grayscale PNG encoding for cached artifacts.

use image::ImageFormat;
use mono_dither::MonoBitmap;

use crate::error::ArtifactError;
use crate::models::TargetGeometry;

/// Encode a bitmap as a 1-bit grayscale PNG.
///
/// Scanlines are [`MonoBitmap::to_packed`] verbatim. The file is re-compressed
/// with oxipng; if that fails the plain encoding is returned.
pub fn encode_mono_png(bitmap: &MonoBitmap) -> Result<Vec<u8>, ArtifactError> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, bitmap.width(), bitmap.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);
        // Fast settings, oxipng re-compresses below
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&bitmap.to_packed())?;
    }

    let optimized = oxipng::optimize_from_memory(
        &buf,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::debug!(%e, "oxipng failed, keeping plain encoding");
            Ok(buf)
        }
    }
}

/// Decode a cached artifact and check it against the expected geometry.
///
/// Any PNG whose pixels are all pure black or white is accepted, whatever
/// bit depth it was stored with.
pub fn decode_mono_png(
    bytes: &[u8],
    geometry: TargetGeometry,
) -> Result<MonoBitmap, ArtifactError> {
    let gray = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.into_luma8();
    let (actual_width, actual_height) = gray.dimensions();
    if (actual_width, actual_height) != (geometry.width, geometry.height) {
        return Err(ArtifactError::Geometry {
            width: geometry.width,
            height: geometry.height,
            actual_width,
            actual_height,
        });
    }
    Ok(MonoBitmap::from_binary(
        actual_width,
        actual_height,
        gray.into_raw(),
    )?)
}
