use std::io;

use thiserror::Error;

/// Errors produced while loading, configuring or writing an ASCII rendering.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// The byte stream could not be parsed as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded, but its format is not one we render.
    #[error("unsupported format: {format}")]
    UnsupportedFormat {
        /// Name of the detected format.
        format: String,
    },

    /// Resize ratio outside the accepted range.
    #[error("resize ratio must be between {min} and {max}, got {ratio}")]
    InvalidRatio {
        /// The rejected ratio.
        ratio: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Reading the source or writing the output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl AsciiError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
