pub mod config;
pub mod geometry;
pub mod processing;

pub use config::{AppConfig, DirectoryConfig};
pub use geometry::TargetGeometry;
pub use processing::ProcessingParameters;
