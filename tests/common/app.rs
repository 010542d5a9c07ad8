//! Test cache factory for integration tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use inkframe::error::PipelineError;
use inkframe::models::{ProcessingParameters, TargetGeometry};
use inkframe::services::{ImageProcess, ImageProcessor, Processed, ProcessedCache};

/// Wraps the real processor and counts how often the expensive path runs.
pub struct CountingProcessor {
    inner: ImageProcessor,
    calls: AtomicUsize,
}

impl CountingProcessor {
    pub fn new(geometry: TargetGeometry) -> Self {
        Self {
            inner: ImageProcessor::new(geometry),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageProcess for CountingProcessor {
    fn geometry(&self) -> TargetGeometry {
        self.inner.geometry()
    }

    fn process_path(
        &self,
        path: &Path,
        params: &ProcessingParameters,
    ) -> Result<Processed, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.process_path(path, params)
    }
}

/// Initialized cache over fresh temporary queue and cache directories
pub struct TestCache {
    pub cache: ProcessedCache<CountingProcessor>,
    root: TempDir,
}

impl TestCache {
    /// 400x300, given dither mode, identity enhancements
    pub fn new(dither_mode: &str) -> Self {
        Self::with(
            TargetGeometry::default(),
            ProcessingParameters::new(dither_mode),
        )
    }

    pub fn with(geometry: TargetGeometry, params: ProcessingParameters) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(root.path().join("queue")).expect("Failed to create queue dir");

        let mut cache = ProcessedCache::new(
            root.path().join("processed"),
            CountingProcessor::new(geometry),
            params,
        );
        cache.initialize().expect("Failed to initialize cache");

        Self { cache, root }
    }

    pub fn queue_dir(&self) -> PathBuf {
        self.root.path().join("queue")
    }

    pub fn cache_dir(&self) -> &Path {
        self.cache.cache_dir()
    }

    /// Times the processor has actually run
    pub fn calls(&self) -> usize {
        self.cache.processor().calls()
    }

    /// Number of `*.png` artifacts currently in the cache directory
    pub fn artifact_count(&self) -> usize {
        std::fs::read_dir(self.cache_dir())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
            .count()
    }
}
