//! Raw sample formats.
//!
//! This module describes how samples are laid out in a raw buffer handed
//! over by an imaging library, and which primitive numeric type is used
//! to read each of them.
//!
//! # Types
//!
//! - [`PrimitiveKind`] - Dispatch tag derived from sample width and float flag
//! - [`PixelFormatDescriptor`] - Everything needed to interpret a raw buffer
//!
//! # Usage
//!
//! ```rust
//! use rawrgb_core::format::{PixelFormatDescriptor, PrimitiveKind};
//!
//! // 16-bit signed little-endian, planar RGB
//! let desc = PixelFormatDescriptor::new(640, 480, 2)
//!     .with_signed(true)
//!     .with_interleaved(false);
//!
//! assert_eq!(desc.kind(), PrimitiveKind::Short);
//! assert_eq!(desc.required_len().unwrap(), 640 * 480 * 3 * 2);
//! ```

use crate::error::{Error, Result};

/// Number of channels in every raw buffer and in the output.
///
/// Raw buffers are always treated as RGB; other channel counts are not
/// supported.
pub const CHANNELS: usize = 3;

/// Primitive numeric type used to read one raw sample.
///
/// Derived from `(bytes_per_sample, is_float)`; never stored alongside
/// the data.
///
/// | bytes | float | kind |
/// |-------|-------|------|
/// | 1 | any | `Byte` |
/// | 2 | any | `Short` |
/// | 4 | no | `Int` |
/// | 4 | yes | `Float` |
/// | 8 | any | `Double` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    /// 8-bit integer.
    Byte,
    /// 16-bit integer.
    Short,
    /// 32-bit integer.
    Int,
    /// 32-bit IEEE 754 float.
    Float,
    /// 64-bit IEEE 754 float.
    Double,
}

impl PrimitiveKind {
    /// Resolves the kind for a sample width and float flag.
    ///
    /// Widths outside {1, 2, 4, 8} fall back to [`PrimitiveKind::Byte`]
    /// instead of failing. Callers that care should check
    /// [`PrimitiveKind::is_supported_width`] first.
    ///
    /// # Example
    /// ```rust
    /// use rawrgb_core::PrimitiveKind;
    /// assert_eq!(PrimitiveKind::from_layout(4, true), PrimitiveKind::Float);
    /// assert_eq!(PrimitiveKind::from_layout(4, false), PrimitiveKind::Int);
    /// assert_eq!(PrimitiveKind::from_layout(3, false), PrimitiveKind::Byte);
    /// ```
    #[inline]
    pub const fn from_layout(bytes_per_sample: u8, is_float: bool) -> Self {
        match bytes_per_sample {
            1 => Self::Byte,
            2 => Self::Short,
            4 if is_float => Self::Float,
            4 => Self::Int,
            8 => Self::Double,
            _ => Self::Byte,
        }
    }

    /// Whether `bytes_per_sample` maps to a kind without falling back.
    #[inline]
    pub const fn is_supported_width(bytes_per_sample: u8) -> bool {
        matches!(bytes_per_sample, 1 | 2 | 4 | 8)
    }

    /// Number of bytes read for one sample of this kind.
    #[inline]
    pub const fn size(&self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Short => 2,
            Self::Int | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Whether this is an IEEE 754 floating-point kind.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layout and encoding of a raw sample buffer.
///
/// Supplied by the imaging library together with the bytes. The default
/// built by [`PixelFormatDescriptor::new`] is unsigned integer,
/// little-endian, interleaved, with no range overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelFormatDescriptor {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Width of one encoded sample in bytes (1, 2, 4 or 8).
    pub bytes_per_sample: u8,
    /// Samples are IEEE 754 floats.
    pub is_float: bool,
    /// Integer samples are two's-complement signed.
    pub is_signed: bool,
    /// Multi-byte samples are little-endian.
    pub is_little_endian: bool,
    /// Channels are interleaved (RGBRGB...) rather than planar (RR..GG..BB..).
    pub interleaved: bool,
    /// Explicit minimum sample value, replacing the type default.
    pub min_override: Option<f64>,
    /// Explicit maximum sample value, replacing the type default.
    pub max_override: Option<f64>,
}

impl PixelFormatDescriptor {
    /// Creates a descriptor for unsigned, little-endian, interleaved integer samples.
    pub fn new(width: u32, height: u32, bytes_per_sample: u8) -> Self {
        Self {
            width,
            height,
            bytes_per_sample,
            is_float: false,
            is_signed: false,
            is_little_endian: true,
            interleaved: true,
            min_override: None,
            max_override: None,
        }
    }

    /// Sets the floating-point flag.
    pub fn with_float(mut self, is_float: bool) -> Self {
        self.is_float = is_float;
        self
    }

    /// Sets the signedness flag.
    pub fn with_signed(mut self, is_signed: bool) -> Self {
        self.is_signed = is_signed;
        self
    }

    /// Sets the byte order.
    pub fn with_little_endian(mut self, is_little_endian: bool) -> Self {
        self.is_little_endian = is_little_endian;
        self
    }

    /// Sets interleaved (`true`) or planar (`false`) layout.
    pub fn with_interleaved(mut self, interleaved: bool) -> Self {
        self.interleaved = interleaved;
        self
    }

    /// Sets both range overrides. `None` keeps the type default for that bound.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_override = min;
        self.max_override = max;
        self
    }

    /// Primitive kind used to read samples.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::from_layout(self.bytes_per_sample, self.is_float)
    }

    /// Number of samples in one image: `width * height * CHANNELS`.
    pub fn sample_count(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or_else(|| {
                Error::invalid_dimensions(self.width, self.height, "sample count overflows")
            })
    }

    /// Number of raw bytes the descriptor requires.
    pub fn required_len(&self) -> Result<usize> {
        self.sample_count()?
            .checked_mul(self.bytes_per_sample as usize)
            .ok_or_else(|| Error::invalid_dimensions(self.width, self.height, "byte size overflows"))
    }

    /// Output length for a raw buffer of `raw_len` bytes.
    ///
    /// One output byte per complete input sample. Returns 0 for a zero
    /// sample width; [`PixelFormatDescriptor::validate`] rejects that case.
    #[inline]
    pub fn output_len(&self, raw_len: usize) -> usize {
        match self.bytes_per_sample {
            0 => 0,
            bps => raw_len / bps as usize,
        }
    }

    /// Checks that `raw` can be read with this descriptor.
    ///
    /// Fails with [`Error::InvalidFormat`] for a zero sample width and
    /// [`Error::BufferTooShort`] when the buffer holds fewer bytes than
    /// [`required_len`](Self::required_len). Longer buffers are accepted.
    pub fn validate(&self, raw: &[u8]) -> Result<()> {
        if self.bytes_per_sample == 0 {
            return Err(Error::invalid_format("bytes per sample must be non-zero"));
        }
        let required = self.required_len()?;
        if raw.len() < required {
            return Err(Error::buffer_too_short(required, raw.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_table() {
        for is_float in [false, true] {
            assert_eq!(PrimitiveKind::from_layout(1, is_float), PrimitiveKind::Byte);
            assert_eq!(PrimitiveKind::from_layout(2, is_float), PrimitiveKind::Short);
            assert_eq!(PrimitiveKind::from_layout(8, is_float), PrimitiveKind::Double);
        }
        assert_eq!(PrimitiveKind::from_layout(4, false), PrimitiveKind::Int);
        assert_eq!(PrimitiveKind::from_layout(4, true), PrimitiveKind::Float);
    }

    #[test]
    fn test_kind_fallback() {
        for bps in [0u8, 3, 5, 6, 7, 9, 16, 255] {
            assert!(!PrimitiveKind::is_supported_width(bps));
            assert_eq!(PrimitiveKind::from_layout(bps, false), PrimitiveKind::Byte);
            assert_eq!(PrimitiveKind::from_layout(bps, true), PrimitiveKind::Byte);
        }
    }

    #[test]
    fn test_kind_size_matches_width() {
        for (bps, is_float) in [(1u8, false), (2, false), (4, false), (4, true), (8, true)] {
            let kind = PrimitiveKind::from_layout(bps, is_float);
            assert_eq!(kind.size(), bps as usize);
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PrimitiveKind::Short.to_string(), "short");
        assert!(PrimitiveKind::Double.is_float());
        assert!(!PrimitiveKind::Int.is_float());
    }

    #[test]
    fn test_descriptor_lengths() {
        let desc = PixelFormatDescriptor::new(4, 2, 2);
        assert_eq!(desc.sample_count().unwrap(), 24);
        assert_eq!(desc.required_len().unwrap(), 48);
        assert_eq!(desc.output_len(48), 24);
        assert_eq!(desc.output_len(49), 24);
    }

    #[test]
    fn test_validate_short_buffer() {
        let desc = PixelFormatDescriptor::new(2, 2, 4);
        let err = desc.validate(&[0u8; 47]).unwrap_err();
        assert!(matches!(err, Error::BufferTooShort { required: 48, actual: 47 }));
        assert!(desc.validate(&[0u8; 48]).is_ok());
        assert!(desc.validate(&[0u8; 64]).is_ok());
    }

    #[test]
    fn test_validate_zero_width_sample() {
        let desc = PixelFormatDescriptor::new(1, 1, 0);
        assert!(matches!(desc.validate(&[0u8; 3]), Err(Error::InvalidFormat(_))));
        assert_eq!(desc.output_len(3), 0);
    }

    #[test]
    fn test_overflowing_dimensions() {
        let desc = PixelFormatDescriptor::new(u32::MAX, u32::MAX, 8);
        if usize::BITS == 64 {
            assert!(matches!(
                desc.required_len(),
                Err(Error::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_builder() {
        let desc = PixelFormatDescriptor::new(1, 1, 4)
            .with_float(true)
            .with_signed(true)
            .with_little_endian(false)
            .with_interleaved(false)
            .with_range(Some(-1.0), None);
        assert_eq!(desc.kind(), PrimitiveKind::Float);
        assert!(desc.is_signed);
        assert!(!desc.is_little_endian);
        assert!(!desc.interleaved);
        assert_eq!(desc.min_override, Some(-1.0));
        assert_eq!(desc.max_override, None);
    }
}
