use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{ImageFile, ImageFormat};

/// Discover image files in the source directory.
///
/// Only direct entries are considered; subdirectories are not descended into.
pub fn discover_images(directory: &Path, config: &Config) -> Result<Vec<ImageFile>> {
    if !directory.is_dir() {
        return Err(Error::SourceNotFound(directory.to_path_buf()));
    }

    let mut image_files = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|_| Error::SourceNotFound(directory.to_path_buf()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            if config.matches_extension(ext) {
                image_files.push(ImageFile {
                    path: path.to_path_buf(),
                    format: ImageFormat::from_extension(ext),
                });
            }
        }
    }

    Ok(image_files)
}

// -- Tests --
