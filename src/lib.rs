//! Inkframe - photo preparation for 1-bit e-paper panels
//!
//! Fits arbitrary photos onto a fixed panel geometry, applies tone
//! adjustments, dithers to pure black and white, and keeps the results in
//! a staleness-aware on-disk cache.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
