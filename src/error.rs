use std::path::PathBuf;

use mono_dither::{DitherError, UnknownMode};
use thiserror::Error;

/// Fatal error for a single image.
///
/// Always names the image it happened to, so a batch can log it and move on.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to decode {image}: {source}")]
    Decode {
        image: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid dimensions {width}x{height} for {image}")]
    Dimension {
        image: String,
        width: u32,
        height: u32,
    },

    #[error("Invalid {name} multiplier {value}: must be a finite number above zero")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Processed-image cache at {cache_dir} is not initialized")]
    CacheNotInitialized { cache_dir: PathBuf },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Cache failure. Never fatal: surfaced to callers as a [`PipelineWarning`].
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("Cannot read cached artifact {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Cannot write cached artifact {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Problems with an encoded 1-bit PNG artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("PNG decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Artifact is {actual_width}x{actual_height}, expected {width}x{height}")]
    Geometry {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Artifact is not a 1-bit image: {0}")]
    NotMonochrome(#[from] DitherError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: PipelineError,
    },
}

/// Recoverable condition reported next to a successful result.
#[derive(Debug, Clone, Error)]
pub enum PipelineWarning {
    #[error("{0}")]
    UnsupportedMode(UnknownMode),

    #[error("{0}")]
    CacheRead(CacheError),

    #[error("{0}")]
    CacheWrite(CacheError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mono_dither::DitherMode;

    #[test]
    fn test_errors_name_the_image() {
        let err = PipelineError::Dimension {
            image: "queue/cat.jpg".to_string(),
            width: 0,
            height: 12,
        };
        assert_eq!(err.to_string(), "Invalid dimensions 0x12 for queue/cat.jpg");
    }

    #[test]
    fn test_unsupported_mode_warning_text() {
        let fallback = DitherMode::resolve("sepia").fallback.unwrap();
        let warning = PipelineWarning::UnsupportedMode(fallback);
        assert_eq!(
            warning.to_string(),
            "unknown dither mode 'sepia', using floyd-steinberg"
        );
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let err = ConfigError::Invalid {
            path: PathBuf::from("settings.yaml"),
            source: PipelineError::InvalidParameter {
                name: "contrast",
                value: -1.0,
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("contrast"));
    }
}
