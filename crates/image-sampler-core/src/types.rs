use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Recognized raster image formats
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Other(String),
}

impl ImageFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            other => Self::Other(other.to_string()),
        }
    }

    /// Check if format is a recognized image format
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Png | Self::Jpeg | Self::Bmp | Self::Gif => true,
            Self::Other(_) => false,
        }
    }
}

/// Representation of an image file in the source directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    /// Full path to the image file
    pub path: PathBuf,

    /// Image format, classified from the extension
    pub format: ImageFormat,
}

/// Outcome of a sampling run
#[derive(Debug, Clone)]
pub struct MoveReport {
    /// Number of files relocated
    pub moved: usize,

    /// Source directory
    pub source: PathBuf,

    /// Destination directory
    pub destination: PathBuf,

    /// Whether this was a dry run (nothing actually moved)
    pub dry_run: bool,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "{} files would be moved from {} to {}.",
                self.moved,
                self.source.display(),
                self.destination.display()
            )
        } else {
            write!(
                f,
                "{} files moved from {} to {}.",
                self.moved,
                self.source.display(),
                self.destination.display()
            )
        }
    }
}
