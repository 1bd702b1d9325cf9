//! Error types for reading through a raw source.

use thiserror::Error;

/// Error reading an image through a [`RawSource`](crate::RawSource).
#[derive(Debug, Error)]
pub enum IoError {
    /// The imaging library could not open or parse the file.
    #[error("file could not be parsed: {0}")]
    FormatNotSupported(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The imaging library failed to release the file after reading it.
    #[error("failed to close source: {0}")]
    Close(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The raw bytes could not be converted.
    #[error(transparent)]
    Convert(#[from] rawrgb_core::Error),

    /// Pixel buffer does not match the image dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

impl IoError {
    /// Wraps an imaging library error.
    pub fn format_not_supported(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::FormatNotSupported(Box::new(err))
    }

    /// Wraps an imaging library error raised while closing.
    pub fn close_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Close(Box::new(err))
    }
}

/// Result type for raw source reads.
pub type IoResult<T> = Result<T, IoError>;
