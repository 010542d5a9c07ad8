use mono_dither::MonoBitmap;
use sha2::{Digest, Sha256};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::image_processor::{ImageProcess, ImageProcessor};
use crate::error::{CacheError, PipelineError, PipelineWarning};
use crate::models::ProcessingParameters;
use crate::rendering::{decode_mono_png, encode_mono_png};

/// Cache file name for a source: `{stem}_{hash8}.png`.
///
/// `hash8` is the first 8 hex digits of the SHA-256 of the source's file
/// name. The key depends on the name only, so two sources with the same
/// file name share an entry.
pub fn cache_key(source: &Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| source.to_string_lossy());
    let stem = Path::new(name.as_ref())
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let digest = Sha256::digest(name.as_bytes());
    format!("{}_{}.png", stem, &hex::encode(digest)[..8])
}

/// Where a bitmap came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOrigin {
    /// Read from a fresh cached artifact
    Hit,
    /// Computed by the processor
    Miss,
}

impl fmt::Display for CacheOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheOrigin::Hit => f.write_str("hit"),
            CacheOrigin::Miss => f.write_str("miss"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheOutcome {
    pub bitmap: MonoBitmap,
    pub origin: CacheOrigin,
    /// Path of the cache artifact (may not exist if the write failed)
    pub path: PathBuf,
    pub warnings: Vec<PipelineWarning>,
}

/// Summary of [`ProcessedCache::preprocess_all`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Sources that had to be processed
    pub processed: usize,
    /// Sources already fresh in the cache
    pub cached: usize,
    pub failed: Vec<(PathBuf, PipelineError)>,
    pub warnings: Vec<(PathBuf, PipelineWarning)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed + self.cached + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheState {
    Uninitialized,
    Ready,
}

/// Directory of processed 1-bit artifacts, one per source file name.
///
/// An artifact is served only while its modification time is at least the
/// source's; anything older is reprocessed and overwritten. Artifacts are
/// written to a temporary file in the same directory and renamed into place,
/// so readers never see a partial file.
///
/// The cache starts uninitialized. [`ProcessedCache::initialize`] creates
/// the directory; every other operation fails with
/// [`PipelineError::CacheNotInitialized`] until it has run.
pub struct ProcessedCache<P: ImageProcess = ImageProcessor> {
    cache_dir: PathBuf,
    processor: P,
    params: ProcessingParameters,
    state: CacheState,
}

impl<P: ImageProcess> ProcessedCache<P> {
    pub fn new(cache_dir: impl Into<PathBuf>, processor: P, params: ProcessingParameters) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            processor,
            params,
            state: CacheState::Uninitialized,
        }
    }

    /// Create the cache directory and mark the cache ready.
    ///
    /// Calling it again on a ready cache is a no-op.
    pub fn initialize(&mut self) -> Result<(), PipelineError> {
        if self.state == CacheState::Ready {
            return Ok(());
        }
        std::fs::create_dir_all(&self.cache_dir).map_err(|source| PipelineError::Io {
            path: self.cache_dir.clone(),
            source,
        })?;
        self.state = CacheState::Ready;
        tracing::info!(
            cache_dir = %self.cache_dir.display(),
            dither_mode = %self.params.dither_mode,
            "Processed-image cache initialized"
        );
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.state == CacheState::Ready
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn params(&self) -> &ProcessingParameters {
        &self.params
    }

    fn ensure_ready(&self) -> Result<(), PipelineError> {
        match self.state {
            CacheState::Ready => Ok(()),
            CacheState::Uninitialized => Err(PipelineError::CacheNotInitialized {
                cache_dir: self.cache_dir.clone(),
            }),
        }
    }

    /// Path the artifact for `source` is stored at.
    pub fn cache_path(&self, source: &Path) -> Result<PathBuf, PipelineError> {
        self.ensure_ready()?;
        Ok(self.cache_dir.join(cache_key(source)))
    }

    /// Return the bitmap for `source`, from the cache when fresh.
    pub fn get_or_process(&self, source: &Path) -> Result<CacheOutcome, PipelineError> {
        let path = self.cache_path(source)?;
        let source_mtime = modified(source).map_err(|e| PipelineError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

        let mut warnings = Vec::new();
        match self.read_fresh(&path, source_mtime) {
            Ok(Some(bitmap)) => {
                tracing::info!(
                    source = %source.display(),
                    artifact = %path.display(),
                    "Using cached processed image"
                );
                return Ok(CacheOutcome {
                    bitmap,
                    origin: CacheOrigin::Hit,
                    path,
                    warnings,
                });
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(%e, "Ignoring unreadable cache artifact");
                warnings.push(PipelineWarning::CacheRead(e));
            }
        }

        let processed = self.processor.process_path(source, &self.params)?;
        warnings.extend(processed.warnings);

        match self.write_artifact(&path, &processed.bitmap) {
            Ok(()) => tracing::info!(
                source = %source.display(),
                artifact = %path.display(),
                "Cached processed image"
            ),
            Err(e) => {
                tracing::warn!(%e, "Failed to cache processed image");
                warnings.push(PipelineWarning::CacheWrite(e));
            }
        }

        Ok(CacheOutcome {
            bitmap: processed.bitmap,
            origin: CacheOrigin::Miss,
            path,
            warnings,
        })
    }

    /// `Ok(None)` when there is no artifact or it is older than the source.
    fn read_fresh(
        &self,
        path: &Path,
        source_mtime: SystemTime,
    ) -> Result<Option<MonoBitmap>, CacheError> {
        let read_error = |reason: String| CacheError::Read {
            path: path.to_path_buf(),
            reason,
        };

        let cache_mtime = match modified(path) {
            Ok(mtime) => mtime,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(artifact = %path.display(), "No cached artifact");
                return Ok(None);
            }
            Err(e) => return Err(read_error(e.to_string())),
        };

        if cache_mtime < source_mtime {
            tracing::info!(artifact = %path.display(), "Cache outdated, reprocessing");
            return Ok(None);
        }

        let bytes = std::fs::read(path).map_err(|e| read_error(e.to_string()))?;
        let bitmap = decode_mono_png(&bytes, self.processor.geometry())
            .map_err(|e| read_error(e.to_string()))?;
        Ok(Some(bitmap))
    }

    /// Atomically replace the artifact at `path`.
    fn write_artifact(&self, path: &Path, bitmap: &MonoBitmap) -> Result<(), CacheError> {
        let write_error = |reason: String| CacheError::Write {
            path: path.to_path_buf(),
            reason,
        };

        let bytes = encode_mono_png(bitmap).map_err(|e| write_error(e.to_string()))?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".inkframe-")
            .suffix(".part")
            .tempfile_in(&self.cache_dir)
            .map_err(|e| write_error(e.to_string()))?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| write_error(e.to_string()))?;
        tmp.persist(path).map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(artifact = %path.display(), bytes = bytes.len(), "Wrote artifact");
        Ok(())
    }

    /// Run [`get_or_process`](Self::get_or_process) for every source.
    ///
    /// A failing source is logged and recorded in the report; the batch
    /// always runs to the end.
    pub fn preprocess_all<I, S>(&self, sources: I) -> Result<BatchReport, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.ensure_ready()?;
        let sources: Vec<S> = sources.into_iter().collect();
        let total = sources.len();
        tracing::info!(total, "Preprocessing images");

        let mut report = BatchReport::default();
        for (i, source) in sources.iter().enumerate() {
            let source = source.as_ref();
            tracing::debug!(index = i + 1, total, source = %source.display(), "Preprocessing");

            match self.get_or_process(source) {
                Ok(outcome) => {
                    match outcome.origin {
                        CacheOrigin::Hit => report.cached += 1,
                        CacheOrigin::Miss => report.processed += 1,
                    }
                    report.warnings.extend(
                        outcome
                            .warnings
                            .into_iter()
                            .map(|w| (source.to_path_buf(), w)),
                    );
                }
                Err(e) => {
                    tracing::error!(source = %source.display(), %e, "Failed to preprocess image");
                    report.failed.push((source.to_path_buf(), e));
                }
            }
        }

        tracing::info!(
            processed = report.processed,
            cached = report.cached,
            failed = report.failed.len(),
            "Preprocessing complete"
        );
        Ok(report)
    }

    /// Delete every `*.png` artifact in the cache directory.
    pub fn clear_cache(&self) -> Result<usize, PipelineError> {
        self.ensure_ready()?;
        let io_error = |path: &Path, source: std::io::Error| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut count = 0;
        for entry in std::fs::read_dir(&self.cache_dir).map_err(|e| io_error(&self.cache_dir, e))? {
            let path = entry.map_err(|e| io_error(&self.cache_dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "png") {
                std::fs::remove_file(&path).map_err(|e| io_error(&path, e))?;
                count += 1;
            }
        }

        tracing::info!(count, "Cleared cached images");
        Ok(count)
    }
}

fn modified(path: &Path) -> std::io::Result<SystemTime> {
    std::fs::metadata(path)?.modified()
}
