use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkframe::models::{AppConfig, TargetGeometry};
use inkframe::rendering::encode_mono_png;
use inkframe::services::{ImageProcess, ImageProcessor, ProcessedCache};

#[derive(Parser)]
#[command(name = "inkframe")]
#[command(about = "Prepare photos for 1-bit e-paper panels")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = "config/settings.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one image straight to a PNG file (no cache)
    Process {
        /// Source image
        source: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Dither mode: floyd-steinberg, atkinson, ordered or threshold
        #[arg(short, long)]
        mode: Option<String>,

        /// Contrast multiplier (1.0 = unchanged)
        #[arg(long)]
        contrast: Option<f32>,

        /// Brightness multiplier (1.0 = unchanged)
        #[arg(long)]
        brightness: Option<f32>,

        /// Sharpness multiplier (1.0 = unchanged)
        #[arg(long)]
        sharpness: Option<f32>,

        /// Output width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Output height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
    /// Get an image through the processed-image cache and print its artifact path
    Show {
        /// Source image
        source: PathBuf,
    },
    /// Fill the cache (defaults to every file in the queue directory)
    Preprocess {
        /// Source images
        sources: Vec<PathBuf>,
    },
    /// Delete all cached artifacts
    ClearCache,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkframe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load_or_default(&cli.config);

    match cli.command {
        Commands::Process {
            source,
            output,
            mode,
            contrast,
            brightness,
            sharpness,
            width,
            height,
        } => {
            let mut params = config.processing.clone();
            if let Some(mode) = mode {
                params.dither_mode = mode;
            }
            params.contrast = contrast.unwrap_or(params.contrast);
            params.brightness = brightness.unwrap_or(params.brightness);
            params.sharpness = sharpness.unwrap_or(params.sharpness);

            let geometry = TargetGeometry::new(
                width.unwrap_or(config.display.width),
                height.unwrap_or(config.display.height),
            )?;

            let processed = ImageProcessor::new(geometry).process_path(&source, &params)?;
            let png_bytes = encode_mono_png(&processed.bitmap)?;
            std::fs::write(&output, &png_bytes)?;
            println!(
                "Processed {} with {} ({} bytes)",
                output.display(),
                processed.mode,
                png_bytes.len()
            );
            Ok(())
        }
        Commands::Show { source } => {
            let cache = open_cache(&config)?;
            let outcome = cache.get_or_process(&source)?;
            for warning in &outcome.warnings {
                eprintln!("warning: {warning}");
            }
            println!("{} {}", outcome.origin, outcome.path.display());
            Ok(())
        }
        Commands::Preprocess { sources } => {
            let sources = if sources.is_empty() {
                list_queue(&config.directories.queue)?
            } else {
                sources
            };

            let cache = open_cache(&config)?;
            let report = cache.preprocess_all(&sources)?;
            println!(
                "{} processed, {} cached, {} failed",
                report.processed,
                report.cached,
                report.failed.len()
            );
            for (path, e) in &report.failed {
                eprintln!("  ! {}: {e}", path.display());
            }
            if !report.is_success() {
                anyhow::bail!("{} of {} images failed", report.failed.len(), report.total());
            }
            Ok(())
        }
        Commands::ClearCache => {
            let cache = open_cache(&config)?;
            let count = cache.clear_cache()?;
            println!("Cleared {count} cached images");
            Ok(())
        }
    }
}

fn open_cache(config: &AppConfig) -> anyhow::Result<ProcessedCache> {
    let mut cache = ProcessedCache::new(
        &config.directories.processed,
        ImageProcessor::new(config.display),
        config.processing.clone(),
    );
    cache.initialize()?;
    Ok(cache)
}

/// Regular files directly inside `dir`, sorted by name.
fn list_queue(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .map_err(|e| anyhow::anyhow!("Cannot read queue {}: {e}", dir.display()))?
    {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'));
        if path.is_file() && !hidden {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
