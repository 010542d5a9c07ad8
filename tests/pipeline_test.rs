//! End-to-end tests for the decode → fit → enhance → dither pipeline.

mod common;

use image::ImageFormat;
use inkframe::error::{PipelineError, PipelineWarning};
use inkframe::models::{ProcessingParameters, TargetGeometry};
use inkframe::services::{ImageProcess, ImageProcessor};
use mono_dither::DitherMode;
use pretty_assertions::assert_eq;

use common::fixtures;

#[test]
fn test_letterbox_800x400_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_solid(dir.path(), "wide.png", 800, 400, [0, 0, 0]);
    let processor = ImageProcessor::new(TargetGeometry::new(400, 300).unwrap());

    for mode in DitherMode::ALL {
        let processed = processor
            .process_path(&source, &ProcessingParameters::new(mode.as_str()))
            .unwrap();
        let bitmap = &processed.bitmap;

        assert_eq!(bitmap.dimensions(), (400, 300));
        common::assert_white_rows(bitmap, 0..50);
        common::assert_black_rows(bitmap, 50..250);
        common::assert_white_rows(bitmap, 250..300);
    }
}

#[test]
fn test_white_frame_for_every_mode() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_solid(dir.path(), "white.png", 400, 300, [255, 255, 255]);
    let processor = ImageProcessor::new(TargetGeometry::default());

    for mode in DitherMode::ALL {
        let processed = processor
            .process_path(&source, &ProcessingParameters::new(mode.as_str()))
            .unwrap();
        assert_eq!(
            processed.bitmap.white_count(),
            400 * 300,
            "{mode} produced black pixels"
        );
    }
}

#[test]
fn test_output_is_always_binary() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_ramp(dir.path(), "ramp.png", 317, 211);
    let processor = ImageProcessor::new(TargetGeometry::default());
    let params = ProcessingParameters::default()
        .with_brightness(1.1)
        .with_sharpness(1.8);

    for mode in DitherMode::ALL {
        let mut params = params.clone();
        params.dither_mode = mode.to_string();
        let processed = processor.process_path(&source, &params).unwrap();
        assert_eq!(processed.bitmap.dimensions(), (400, 300));
        common::assert_binary(&processed.bitmap);
    }
}

#[test]
fn test_garbage_mode_equals_floyd_steinberg() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_ramp(dir.path(), "ramp.png", 640, 480);
    let processor = ImageProcessor::new(TargetGeometry::default());

    let garbage = processor
        .process_path(&source, &ProcessingParameters::new("glitter-bomb"))
        .unwrap();
    let explicit = processor
        .process_path(&source, &ProcessingParameters::new("floyd-steinberg"))
        .unwrap();

    assert_eq!(garbage.bitmap, explicit.bitmap);
    assert!(explicit.warnings.is_empty());
    match garbage.warnings.as_slice() {
        [PipelineWarning::UnsupportedMode(w)] => assert_eq!(w.requested(), "glitter-bomb"),
        other => panic!("expected one UnsupportedMode warning, got {other:?}"),
    }
}

#[test]
fn test_common_formats_decode() {
    let processor = ImageProcessor::new(TargetGeometry::new(40, 30).unwrap());
    let params = ProcessingParameters::new("threshold");

    for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp] {
        let bytes = fixtures::encode_solid(80, 60, [250, 250, 250], format);
        let processed = processor
            .process_bytes(&bytes, &format!("{format:?}"), &params)
            .unwrap();
        assert_eq!(
            processed.bitmap.white_count(),
            40 * 30,
            "{format:?} decoded wrong"
        );
    }
}

#[test]
fn test_heic_is_a_decode_error() {
    // ISO-BMFF header of an HEIC file
    let mut bytes = b"\x00\x00\x00\x18ftypheic\x00\x00\x00\x00mif1heic".to_vec();
    bytes.extend_from_slice(&[0u8; 64]);

    let processor = ImageProcessor::new(TargetGeometry::default());
    let err = processor
        .process_bytes(&bytes, "IMG_0001.HEIC", &ProcessingParameters::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Decode { ref image, .. } if image == "IMG_0001.HEIC"));
}

#[test]
fn test_corrupt_file_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_corrupt(dir.path(), "broken.jpg");
    let processor = ImageProcessor::new(TargetGeometry::default());

    let err = processor
        .process_path(&source, &ProcessingParameters::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Decode { .. }));
    assert!(err.to_string().contains("broken.jpg"));
}

#[test]
fn test_brightness_lifts_midtones() {
    let dir = tempfile::tempdir().unwrap();
    let source = fixtures::write_ramp(dir.path(), "ramp.png", 400, 300);
    let processor = ImageProcessor::new(TargetGeometry::default());

    let plain = processor
        .process_path(&source, &ProcessingParameters::new("threshold"))
        .unwrap();
    let bright = processor
        .process_path(
            &source,
            &ProcessingParameters::new("threshold").with_brightness(1.5),
        )
        .unwrap();

    assert!(bright.bitmap.white_count() > plain.bitmap.white_count());
}
