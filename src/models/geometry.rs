use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Fixed output geometry of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetGeometry {
    pub width: u32,
    pub height: u32,
}

impl TargetGeometry {
    /// Waveshare 4.2" monochrome panel: 400x300
    pub const WAVESHARE_4IN2: Self = Self {
        width: 400,
        height: 300,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, PipelineError> {
        let geometry = Self { width, height };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject zero-sized geometry (e.g. from a hand-edited config file)
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::Dimension {
                image: "display".to_string(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for TargetGeometry {
    fn default() -> Self {
        Self::WAVESHARE_4IN2
    }
}
