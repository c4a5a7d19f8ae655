//! Core functionality for organizing photo and video collections.
//!
//! This library provides the foundational components for date-bucketed
//! media organizing:
//! - File discovery and classification
//! - Capture timestamp resolution with modification-time fallback
//! - Perceptual-hash duplicate detection for images
//! - Collision-safe copying into the output tree

// -- External Dependencies --

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

// -- Public Re-exports --
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod bucket;
pub mod config;
pub mod copier;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod perceptual;
pub mod placement;
pub mod registry;
pub mod timestamp;
pub mod types;

use registry::SeenRegistry;

/// Counts of how a run's files were disposed of
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files placed into their date bucket
    pub organized: usize,

    /// Files routed to a bucket's duplicates folder
    pub duplicates: usize,

    /// Files with unsupported extensions
    pub unknown: usize,

    /// Images that failed to decode
    pub broken: usize,

    /// Files skipped because of per-file I/O errors
    pub errors: usize,
}

impl RunSummary {
    /// Total number of files visited
    #[must_use]
    pub fn total(&self) -> usize {
        self.organized + self.duplicates + self.unknown + self.broken + self.errors
    }

    fn count(&mut self, disposition: Disposition) {
        match disposition {
            Disposition::Organized => self.organized += 1,
            Disposition::Duplicate => self.duplicates += 1,
            Disposition::Unknown => self.unknown += 1,
            Disposition::Broken => self.broken += 1,
        }
    }
}

/// Main entry point for the organizing process
pub struct Organizer {
    config: Config,
    registry: SeenRegistry,
}

impl Organizer {
    /// Create a new Organizer with the provided configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: SeenRegistry::new(),
        }
    }

    /// Run the full pipeline: walk the input tree, decide each file's
    /// destination, and copy it there.
    ///
    /// Per-file failures are logged and counted but never abort the walk.
    pub fn run(&mut self, input_dir: &Path) -> Result<RunSummary> {
        let start = Instant::now();
        info!("Processing input directory {}", input_dir.display());

        let files = discovery::discover_files(input_dir, &self.config)?;
        info!("Found {} files", files.len());

        let output_root = self.config.output_root(input_dir);
        info!("Output directory {}", output_root.display());
        std::fs::create_dir_all(&output_root)?;

        let progress_bar = ProgressBar::new(files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("[{eta}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        progress_bar.set_message("Organizing...");

        let mut summary = RunSummary::default();
        for file in &files {
            match self.organize_one(file, &output_root) {
                Ok(disposition) => summary.count(disposition),
                Err(e) => {
                    warn!("Skipping {}: {e}", file.display());
                    summary.errors += 1;
                }
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!(
            "Organized {} files in {:.1?}: {} filed, {} duplicates, {} unknown, {} broken, {} errors",
            summary.total(),
            start.elapsed(),
            summary.organized,
            summary.duplicates,
            summary.unknown,
            summary.broken,
            summary.errors,
        );
        Ok(summary)
    }

    /// Place and copy a single file
    fn organize_one(&mut self, file: &Path, output_root: &Path) -> Result<Disposition> {
        let (destination, disposition) =
            placement::place_under(file, output_root, self.config.mode, &mut self.registry)?;
        let written = copier::copy_file(file, &destination)?;
        info!(
            "{} -> {} ({:?})",
            file.display(),
            written.display(),
            disposition
        );
        Ok(disposition)
    }
}

// -- Tests --
