//! Error types for loading images and configuring palette generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mmcq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong around the quantizer. Quantizing itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The image file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image file is corrupt or in an unsupported format
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A level count that isn't a usable non-negative integer
    #[error("invalid level count {value:?}: {reason}")]
    InvalidLevels { value: String, reason: String },

    /// A region of interest that doesn't lie within the image
    #[error("region {width}x{height} at ({x}, {y}) does not fit in a {image_width}x{image_height} image")]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Decoding errors that are really read failures are reported as I/O errors.
    pub(crate) fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        match source {
            image::ImageError::IoError(source) => Self::io(path, source),
            source => Self::Decode {
                path: path.into(),
                source,
            },
        }
    }
}
