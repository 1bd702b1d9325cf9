//! # rawrgb-core
//!
//! Core types for turning raw scientific sample buffers into 8-bit RGB.
//!
//! This crate holds the parts of a conversion that do not depend on the
//! buffer walk itself:
//!
//! - [`PrimitiveKind`] - numeric type read for each sample
//! - [`PixelFormatDescriptor`] - width, height, sample encoding and layout
//! - [`RescaleRange`] - the `[min, max]` window mapped onto `0..=255`
//! - [`SampleDecoder`] - endian-aware sample reads widened to `f64`
//! - [`Error`] - everything a conversion can refuse
//!
//! ## Crate Structure
//!
//! ```text
//! rawrgb-core (this crate)
//!    ^
//!    |
//!    +-- rawrgb-ops (rescale, layout rewriting)
//!    +-- rawrgb-io (imaging library seam, RGB images)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize descriptors and range policies

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod decode;
pub mod error;
pub mod format;
pub mod range;

pub use decode::SampleDecoder;
pub use error::{Error, Result};
pub use format::{CHANNELS, PixelFormatDescriptor, PrimitiveKind};
pub use range::{DISPLAY_MAX, FloatSignedMin, RescaleRange};

/// Prelude module for convenient imports.
///
/// ```
/// use rawrgb_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::decode::SampleDecoder;
    pub use crate::error::{Error, Result};
    pub use crate::format::{CHANNELS, PixelFormatDescriptor, PrimitiveKind};
    pub use crate::range::{FloatSignedMin, RescaleRange};
}
