use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Per-invocation processing settings.
///
/// The dither mode stays a plain string: an unknown name is not an error,
/// it falls back to Floyd-Steinberg with a warning at dither time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingParameters {
    pub dither_mode: String,
    pub contrast: f32,
    pub brightness: f32,
    pub sharpness: f32,
}

impl ProcessingParameters {
    /// Given dither mode, every enhancement at identity (1.0).
    pub fn new(dither_mode: impl Into<String>) -> Self {
        Self {
            dither_mode: dither_mode.into(),
            contrast: 1.0,
            brightness: 1.0,
            sharpness: 1.0,
        }
    }

    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_sharpness(mut self, sharpness: f32) -> Self {
        self.sharpness = sharpness;
        self
    }

    /// Every multiplier must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (name, value) in [
            ("contrast", self.contrast),
            ("brightness", self.brightness),
            ("sharpness", self.sharpness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PipelineError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for ProcessingParameters {
    fn default() -> Self {
        Self::new("atkinson").with_contrast(1.2)
    }
}
