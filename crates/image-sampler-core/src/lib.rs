//! Core functionality for sampling and relocating image files.
//!
//! This library provides the foundational components for curating an
//! annotation subset in an active-learning workflow:
//! - Image file discovery with extension filtering
//! - Uniform random sampling without replacement
//! - Safe file relocation

use log::info;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod discovery;
pub mod relocate;
pub mod sampling;
pub mod types;

/// Main entry point for the sampling process
pub struct ImageSampler {
    config: Config,
}

impl ImageSampler {
    /// Create a new ImageSampler with the provided configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Discover all image files in the configured source directory
    pub fn discover_images(&self) -> Result<Vec<ImageFile>> {
        discovery::discover_images(&self.config.source_dir, &self.config)
    }

    /// Run the full sample-and-relocate pipeline
    pub fn run(&self) -> Result<MoveReport> {
        self.config.validate()?;

        info!(
            "Discovering images in {}...",
            self.config.source_dir.display()
        );
        let images = self.discover_images()?;
        info!("Found {} image files", images.len());

        let selected = sampling::sample_images(&images, self.config.sample_size)?;
        info!("Selected {} files for annotation", selected.len());

        if self.config.dry_run {
            for file in &selected {
                info!("Would move {}", file.path.display());
            }
            return Ok(MoveReport {
                moved: selected.len(),
                source: self.config.source_dir.clone(),
                destination: self.config.destination_dir.clone(),
                dry_run: true,
            });
        }

        let moved = relocate::relocate_images(&selected, &self.config.destination_dir)?;

        Ok(MoveReport {
            moved,
            source: self.config.source_dir.clone(),
            destination: self.config.destination_dir.clone(),
            dry_run: false,
        })
    }
}
