//! Error types for rawrgb operations.
//!
//! A single [`Error`] enum covers every way a conversion can be refused:
//! - Raw buffers shorter than the descriptor declares
//! - Rescale ranges that cannot be divided by
//! - Dimensions whose byte size overflows `usize`
//! - Format descriptors that cannot be dispatched at all
//!
//! Out-of-table `bytes_per_sample` values are *not* errors: they degrade
//! to [`PrimitiveKind::Byte`](crate::PrimitiveKind::Byte). Only a zero
//! sample width is refused, since the output length divides by it.
//!
//! # Usage
//!
//! ```rust
//! use rawrgb_core::{Error, Result};
//!
//! fn check_len(raw: &[u8], required: usize) -> Result<()> {
//!     if raw.len() < required {
//!         return Err(Error::buffer_too_short(required, raw.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_len(&[0; 4], 6).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for `Display` and `std::error::Error`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding and rescaling raw samples.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw buffer holds fewer bytes than the descriptor requires.
    ///
    /// The whole buffer is checked before the first sample is read, so
    /// sample decoding never indexes past the end.
    #[error("raw buffer too short: {required} bytes required, got {actual}")]
    BufferTooShort {
        /// Bytes required by width, height, channel count and sample width
        required: usize,
        /// Bytes actually supplied
        actual: usize,
    },

    /// Rescale range has zero width or a NaN bound.
    ///
    /// `255 / (max - min)` would be infinite or NaN, so no output byte
    /// would be meaningful.
    #[error("degenerate rescale range [{min}, {max}]")]
    DegenerateRange {
        /// Resolved minimum
        min: f64,
        /// Resolved maximum
        max: f64,
    },

    /// Width and height cannot be turned into a buffer size.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Format descriptor cannot be dispatched.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl Error {
    /// Creates an [`Error::BufferTooShort`] error.
    #[inline]
    pub fn buffer_too_short(required: usize, actual: usize) -> Self {
        Self::BufferTooShort { required, actual }
    }

    /// Creates an [`Error::DegenerateRange`] error.
    #[inline]
    pub fn degenerate_range(min: f64, max: f64) -> Self {
        Self::DegenerateRange { min, max }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Returns `true` if the raw buffer was too short.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::BufferTooShort { .. })
    }

    /// Returns `true` if the rescale range was unusable.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::DegenerateRange { .. })
    }
}
