//! Raw sources and the read pipeline.
//!
//! A [`RawSource`] is the imaging library: it owns file access, format
//! sniffing and metadata, and hands over one plane of raw bytes plus the
//! descriptor needed to interpret them. [`read_rgb`] turns that into an
//! [`RgbImage`] and its [`Metadata`].

use rawrgb_core::PixelFormatDescriptor;
use rawrgb_ops::{ConvertOptions, convert_with};
use tracing::{debug, trace};

use crate::error::{IoError, IoResult};
use crate::image::RgbImage;
use crate::metadata::Metadata;

/// Supplier of raw sample bytes.
///
/// # Example
///
/// ```rust,ignore
/// struct TiffSource { /* decoder handle */ }
///
/// impl RawSource for TiffSource {
///     type Error = tiff::TiffError;
///
///     fn descriptor(&self) -> PixelFormatDescriptor { /* from the IFD */ }
///     fn open_bytes(&mut self) -> Result<Vec<u8>, Self::Error> { /* first strip set */ }
/// }
/// ```
pub trait RawSource {
    /// Imaging library error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Layout of the bytes returned by [`open_bytes`](Self::open_bytes).
    ///
    /// Range overrides set here are ignored by [`read_rgb`].
    fn descriptor(&self) -> PixelFormatDescriptor;

    /// Reads the raw bytes of the first series, first plane.
    fn open_bytes(&mut self) -> Result<Vec<u8>, Self::Error>;

    /// File-level metadata as `(key, value)` text pairs.
    fn global_metadata(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Releases the underlying file.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A decoded image with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// 8-bit interleaved RGB pixels.
    pub pixels: RgbImage,
    /// `Width`, `Height`, then source metadata.
    pub metadata: Metadata,
}

/// Reads `source` and converts it to 8-bit interleaved RGB.
///
/// Range bounds always come from the sample type. The source is closed
/// whether or not the read succeeds; a read error takes precedence over a
/// close error.
pub fn read_rgb<S: RawSource>(source: &mut S, opts: &ConvertOptions) -> IoResult<DecodedImage> {
    let result = read_open(source, opts);
    let closed = source.close().map_err(IoError::close_failed);
    let image = result?;
    closed?;
    Ok(image)
}

fn read_open<S: RawSource>(source: &mut S, opts: &ConvertOptions) -> IoResult<DecodedImage> {
    let desc = source.descriptor().with_range(None, None);
    trace!(width = desc.width, height = desc.height, "read_rgb");

    let metadata = Metadata::for_image(desc.width, desc.height, source.global_metadata());
    let raw = source.open_bytes().map_err(IoError::format_not_supported)?;
    debug!(bytes = raw.len(), entries = metadata.len(), "read raw plane");

    let mut rgb = convert_with(&raw, &desc, opts)?;
    rgb.truncate(desc.sample_count()?);

    let pixels = RgbImage::from_raw(desc.width, desc.height, rgb)?;
    Ok(DecodedImage { pixels, metadata })
}

/// In-memory [`RawSource`] for bytes that are already loaded.
#[derive(Debug, Clone)]
pub struct MemorySource {
    desc: PixelFormatDescriptor,
    bytes: Vec<u8>,
    metadata: Vec<(String, String)>,
}

impl MemorySource {
    /// Creates a source over `bytes` laid out as `desc`.
    pub fn new(desc: PixelFormatDescriptor, bytes: Vec<u8>) -> Self {
        Self {
            desc,
            bytes,
            metadata: Vec::new(),
        }
    }

    /// Adds a metadata entry reported by [`RawSource::global_metadata`].
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

impl RawSource for MemorySource {
    type Error = std::convert::Infallible;

    fn descriptor(&self) -> PixelFormatDescriptor {
        self.desc
    }

    fn open_bytes(&mut self) -> Result<Vec<u8>, Self::Error> {
        Ok(self.bytes.clone())
    }

    fn global_metadata(&self) -> Vec<(String, String)> {
        self.metadata.clone()
    }
}
