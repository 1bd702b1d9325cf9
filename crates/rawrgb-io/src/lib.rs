//! # rawrgb-io
//!
//! Glue between an imaging library and the raw-to-RGB conversion.
//!
//! The imaging library opens files, detects formats and extracts
//! metadata; this crate only defines what it must hand over and packages
//! the converted result.
//!
//! # Architecture
//!
//! - [`RawSource`] - trait implemented over the imaging library
//! - [`read_rgb`] - metadata, raw bytes, conversion, close
//! - [`RgbImage`] - 8-bit interleaved RGB result
//! - [`Metadata`] - ordered `Width`, `Height` and library entries
//!
//! # Quick Start
//!
//! ```rust
//! use rawrgb_core::PixelFormatDescriptor;
//! use rawrgb_io::{read_rgb, MemorySource};
//! use rawrgb_ops::ConvertOptions;
//!
//! let desc = PixelFormatDescriptor::new(1, 1, 2).with_little_endian(false);
//! let mut source = MemorySource::new(desc, vec![0x00, 0x00, 0x80, 0x00, 0xFF, 0xFF])
//!     .with_metadata("Instrument", "confocal");
//!
//! let image = read_rgb(&mut source, &ConvertOptions::default()).unwrap();
//! assert_eq!(image.pixels.pixel(0, 0), Some([0, 127, 255]));
//! assert_eq!(image.metadata.get("Instrument"), Some("confocal"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod image;
pub mod metadata;
pub mod source;

pub use error::{IoError, IoResult};
pub use image::RgbImage;
pub use metadata::{Metadata, MetadataItem};
pub use source::{DecodedImage, MemorySource, RawSource, read_rgb};
