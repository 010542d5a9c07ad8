//! Dither mode selection by name.

use std::fmt;
use std::str::FromStr;

use crate::api::DitherError;

use super::{Atkinson, Dither, FloydSteinberg, Ordered, Threshold};

/// Dither algorithm selection.
///
/// Configuration files name modes as `floyd-steinberg`, `atkinson`,
/// `ordered` and `threshold`. Parsing is case-insensitive and accepts `_`
/// in place of `-`.
///
/// # Example
///
/// ```
/// use mono_dither::DitherMode;
///
/// let mode: DitherMode = "Floyd_Steinberg".parse().unwrap();
/// assert_eq!(mode, DitherMode::FloydSteinberg);
/// assert_eq!(mode.to_string(), "floyd-steinberg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherMode {
    /// Floyd-Steinberg error diffusion (100% propagation).
    ///
    /// Smooth gradients; also the fallback for unknown names.
    #[default]
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// Higher contrast, preserved highlights, the classic Macintosh look.
    Atkinson,

    /// 4x4 Bayer ordered dithering.
    ///
    /// Deterministic crosshatch texture, no error diffusion.
    Ordered,

    /// Fixed-midpoint threshold, no dithering at all.
    Threshold,
}

impl DitherMode {
    /// Every mode, in documentation order.
    pub const ALL: [DitherMode; 4] = [
        DitherMode::FloydSteinberg,
        DitherMode::Atkinson,
        DitherMode::Ordered,
        DitherMode::Threshold,
    ];

    /// Canonical configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            DitherMode::FloydSteinberg => "floyd-steinberg",
            DitherMode::Atkinson => "atkinson",
            DitherMode::Ordered => "ordered",
            DitherMode::Threshold => "threshold",
        }
    }

    /// The algorithm implementing this mode.
    pub fn algorithm(self) -> &'static dyn Dither {
        match self {
            DitherMode::FloydSteinberg => &FloydSteinberg,
            DitherMode::Atkinson => &Atkinson,
            DitherMode::Ordered => &Ordered,
            DitherMode::Threshold => &Threshold,
        }
    }

    /// Lenient lookup: unknown names resolve to [`DitherMode::FloydSteinberg`]
    /// and the rejected name is returned in [`Resolved::fallback`].
    pub fn resolve(name: &str) -> Resolved {
        match name.parse() {
            Ok(mode) => Resolved {
                mode,
                fallback: None,
            },
            Err(_) => Resolved {
                mode: DitherMode::default(),
                fallback: Some(UnknownMode {
                    requested: name.to_string(),
                }),
            },
        }
    }
}

impl FromStr for DitherMode {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        DitherMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| DitherError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`DitherMode::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The mode that will actually run.
    pub mode: DitherMode,
    /// Set when the requested name was not recognised.
    pub fallback: Option<UnknownMode>,
}

/// Warning value for a mode name that fell back to the default algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode {
    requested: String,
}

impl UnknownMode {
    /// The name that was asked for.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// The mode used instead.
    pub fn substitute(&self) -> DitherMode {
        DitherMode::default()
    }
}

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dither mode '{}', using {}",
            self.requested,
            self.substitute()
        )
    }
}
