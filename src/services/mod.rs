pub mod image_processor;
pub mod processed_cache;

pub use image_processor::{ImageProcess, ImageProcessor, Processed};
pub use processed_cache::{cache_key, BatchReport, CacheOrigin, CacheOutcome, ProcessedCache};
