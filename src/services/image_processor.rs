use mono_dither::{dither_named, DitherMode, MonoBitmap};
use std::path::Path;
use std::time::Instant;

use crate::error::{PipelineError, PipelineWarning};
use crate::models::{ProcessingParameters, TargetGeometry};
use crate::rendering::{decode_bytes, decode_path, enhance, fit, to_grayscale, SourceImage};

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct Processed {
    pub bitmap: MonoBitmap,
    /// The dither mode that actually ran
    pub mode: DitherMode,
    pub warnings: Vec<PipelineWarning>,
}

/// The expensive decode → fit → enhance → dither path.
///
/// The processed-image cache only talks to this trait, so tests can wrap the
/// real processor and count how often it runs.
pub trait ImageProcess: Send + Sync {
    /// Geometry of every bitmap this processor returns
    fn geometry(&self) -> TargetGeometry;

    fn process_path(
        &self,
        path: &Path,
        params: &ProcessingParameters,
    ) -> Result<Processed, PipelineError>;
}

/// Turns source photos into fixed-size 1-bit bitmaps.
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    geometry: TargetGeometry,
}

impl ImageProcessor {
    pub fn new(geometry: TargetGeometry) -> Self {
        tracing::info!(
            width = geometry.width,
            height = geometry.height,
            "Image processor ready"
        );
        Self { geometry }
    }

    /// Process an in-memory image. `label` identifies it in logs and errors.
    pub fn process_bytes(
        &self,
        bytes: &[u8],
        label: &str,
        params: &ProcessingParameters,
    ) -> Result<Processed, PipelineError> {
        params.validate()?;
        let source = decode_bytes(bytes, label)?;
        self.process_source(&source, params)
    }

    /// Run every stage after decoding.
    pub fn process_source(
        &self,
        source: &SourceImage,
        params: &ProcessingParameters,
    ) -> Result<Processed, PipelineError> {
        params.validate()?;
        let start = Instant::now();

        let mut canvas = fit(source, self.geometry)?;
        enhance(&mut canvas, params);
        let gray = to_grayscale(&canvas).map_err(|_| PipelineError::Dimension {
            image: source.label().to_string(),
            width: canvas.width(),
            height: canvas.height(),
        })?;

        let dithered = dither_named(&gray, &params.dither_mode);
        let mut warnings = Vec::new();
        if let Some(fallback) = dithered.warning {
            tracing::warn!(
                image = source.label(),
                requested = fallback.requested(),
                using = %fallback.substitute(),
                "Unknown dither mode"
            );
            warnings.push(PipelineWarning::UnsupportedMode(fallback));
        }

        tracing::debug!(
            image = source.label(),
            mode = %dithered.mode,
            black = dithered.bitmap.black_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Processed image"
        );

        Ok(Processed {
            bitmap: dithered.bitmap,
            mode: dithered.mode,
            warnings,
        })
    }
}

impl ImageProcess for ImageProcessor {
    fn geometry(&self) -> TargetGeometry {
        self.geometry
    }

    fn process_path(
        &self,
        path: &Path,
        params: &ProcessingParameters,
    ) -> Result<Processed, PipelineError> {
        params.validate()?;
        let source = decode_path(path)?;
        self.process_source(&source, params)
    }
}
