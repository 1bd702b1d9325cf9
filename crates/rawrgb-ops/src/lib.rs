//! # rawrgb-ops
//!
//! Converts raw scientific sample buffers into 8-bit interleaved RGB.
//!
//! Samples may be 1, 2, 4 or 8 bytes wide, integer or float, signed or
//! unsigned, big- or little-endian, interleaved or planar. Each sample is
//! decoded to `f64`, rescaled from its `[min, max]` range onto `0..=255`
//! and written as one byte.
//!
//! # Modules
//!
//! - [`convert`](mod@convert) - buffer walk for both layouts
//! - [`rescale`] - `|(v - min) * 255 / (max - min)|` and narrowing
//! - [`options`] - conversion policies
//!
//! # Example
//!
//! ```rust
//! use rawrgb_core::PixelFormatDescriptor;
//! use rawrgb_ops::{convert_with, ConvertOptions};
//!
//! let raw = [0u8, 128, 255];
//! let desc = PixelFormatDescriptor::new(1, 1, 1);
//! let rgb = convert_with(&raw, &desc, &ConvertOptions::default()).unwrap();
//! assert_eq!(rgb, vec![0, 128, 255]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - split large buffers across a Rayon pool (enabled by default)
//! - `serde` - serialize/deserialize [`ConvertOptions`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod options;
pub mod rescale;

#[cfg(feature = "parallel")]
mod parallel;

pub use convert::{convert, convert_with};
pub use options::{ConvertOptions, DEFAULT_PARALLEL_THRESHOLD, OverflowPolicy};
pub use rescale::Rescaler;
