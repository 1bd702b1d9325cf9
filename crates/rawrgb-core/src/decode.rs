//! Sample decoding.
//!
//! Reads one encoded sample from a byte window and widens it to `f64`.
//! Byte order is a property of each [`SampleDecoder`], so buffers of both
//! orders can be converted side by side.
//!
//! # Reads
//!
//! | Kind | signed | unsigned |
//! |------|--------|----------|
//! | Byte | `i8` | `u8` |
//! | Short | `i16` | `u16` |
//! | Int | `i32` | `u32` |
//! | Float | IEEE 754 binary32 | same |
//! | Double | IEEE 754 binary64 | same |
//!
//! # Dependencies
//!
//! - [`byteorder`] - endian-parameterized slice reads

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::format::{PixelFormatDescriptor, PrimitiveKind};

/// Decodes raw samples of one kind, signedness and byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDecoder {
    kind: PrimitiveKind,
    signed: bool,
    little_endian: bool,
}

impl SampleDecoder {
    /// Creates a decoder.
    pub const fn new(kind: PrimitiveKind, signed: bool, little_endian: bool) -> Self {
        Self {
            kind,
            signed,
            little_endian,
        }
    }

    /// Creates the decoder matching a format descriptor.
    pub fn for_format(desc: &PixelFormatDescriptor) -> Self {
        Self::new(desc.kind(), desc.is_signed, desc.is_little_endian)
    }

    /// Primitive kind read by this decoder.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Number of bytes consumed per sample.
    #[inline]
    pub fn width(&self) -> usize {
        self.kind.size()
    }

    /// Decodes the sample at the start of `window`.
    ///
    /// `window` must hold at least [`width`](Self::width) bytes; extra
    /// bytes are ignored. Callers validate the buffer once up front and
    /// slice per sample; a short window panics.
    #[inline]
    pub fn decode(&self, window: &[u8]) -> f64 {
        if self.little_endian {
            read_sample::<LittleEndian>(self.kind, self.signed, window)
        } else {
            read_sample::<BigEndian>(self.kind, self.signed, window)
        }
    }

    /// Decodes the sample starting at byte `offset` of `raw`.
    ///
    /// Fails with [`Error::BufferTooShort`] when the sample would extend
    /// past the end of the buffer.
    ///
    /// # Example
    /// ```rust
    /// use rawrgb_core::{PrimitiveKind, SampleDecoder};
    ///
    /// let dec = SampleDecoder::new(PrimitiveKind::Short, true, true);
    /// assert_eq!(dec.decode_at(&[0x00, 0x80], 0).unwrap(), -32768.0);
    /// assert!(dec.decode_at(&[0x00, 0x80], 1).is_err());
    /// ```
    pub fn decode_at(&self, raw: &[u8], offset: usize) -> Result<f64> {
        let end = offset
            .checked_add(self.width())
            .ok_or_else(|| Error::buffer_too_short(usize::MAX, raw.len()))?;
        match raw.get(offset..end) {
            Some(window) => Ok(self.decode(window)),
            None => Err(Error::buffer_too_short(end, raw.len())),
        }
    }
}

fn read_sample<B: ByteOrder>(kind: PrimitiveKind, signed: bool, buf: &[u8]) -> f64 {
    match (kind, signed) {
        (PrimitiveKind::Byte, true) => buf[0] as i8 as f64,
        (PrimitiveKind::Byte, false) => buf[0] as f64,
        (PrimitiveKind::Short, true) => B::read_i16(buf) as f64,
        (PrimitiveKind::Short, false) => B::read_u16(buf) as f64,
        (PrimitiveKind::Int, true) => B::read_i32(buf) as f64,
        (PrimitiveKind::Int, false) => B::read_u32(buf) as f64,
        (PrimitiveKind::Float, _) => B::read_f32(buf) as f64,
        (PrimitiveKind::Double, _) => B::read_f64(buf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte() {
        let unsigned = SampleDecoder::new(PrimitiveKind::Byte, false, true);
        let signed = SampleDecoder::new(PrimitiveKind::Byte, true, true);
        assert_eq!(unsigned.decode(&[0xFF]), 255.0);
        assert_eq!(signed.decode(&[0xFF]), -1.0);
        assert_eq!(signed.decode(&[0x80]), -128.0);
        assert_eq!(signed.decode(&[0x7F]), 127.0);
    }

    #[test]
    fn test_short_byte_order() {
        let le = SampleDecoder::new(PrimitiveKind::Short, false, true);
        let be = SampleDecoder::new(PrimitiveKind::Short, false, false);
        assert_eq!(le.decode(&[0x01, 0x02]), 0x0201 as f64);
        assert_eq!(be.decode(&[0x01, 0x02]), 0x0102 as f64);
        // Symmetric patterns decode the same either way.
        assert_eq!(le.decode(&[0xAB, 0xAB]), be.decode(&[0xAB, 0xAB]));
    }

    #[test]
    fn test_short_signedness() {
        let signed = SampleDecoder::new(PrimitiveKind::Short, true, true);
        let unsigned = SampleDecoder::new(PrimitiveKind::Short, false, true);
        assert_eq!(signed.decode(&[0x00, 0x80]), -32768.0);
        assert_eq!(signed.decode(&[0xFF, 0x7F]), 32767.0);
        assert_eq!(unsigned.decode(&[0xFF, 0xFF]), 65535.0);
    }

    #[test]
    fn test_int() {
        let signed = SampleDecoder::new(PrimitiveKind::Int, true, false);
        let unsigned = SampleDecoder::new(PrimitiveKind::Int, false, false);
        assert_eq!(signed.decode(&[0x80, 0, 0, 0]), i32::MIN as f64);
        assert_eq!(unsigned.decode(&[0xFF; 4]), u32::MAX as f64);
        assert_eq!(signed.decode(&[0xFF; 4]), -1.0);
    }

    #[test]
    fn test_float_and_double() {
        let f = SampleDecoder::new(PrimitiveKind::Float, true, true);
        assert_eq!(f.decode(&1.5f32.to_le_bytes()), 1.5);
        let f_be = SampleDecoder::new(PrimitiveKind::Float, false, false);
        assert_eq!(f_be.decode(&(-0.25f32).to_be_bytes()), -0.25);

        let d = SampleDecoder::new(PrimitiveKind::Double, false, false);
        assert_eq!(d.decode(&1234.5678f64.to_be_bytes()), 1234.5678);
        let d_le = SampleDecoder::new(PrimitiveKind::Double, false, true);
        assert_ne!(d_le.decode(&1234.5678f64.to_be_bytes()), 1234.5678);
    }

    #[test]
    fn test_decode_at_offsets() {
        let dec = SampleDecoder::new(PrimitiveKind::Short, false, false);
        let raw = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
        assert_eq!(dec.decode_at(&raw, 0).unwrap(), 1.0);
        assert_eq!(dec.decode_at(&raw, 2).unwrap(), 2.0);
        assert_eq!(dec.decode_at(&raw, 4).unwrap(), 3.0);
    }

    #[test]
    fn test_decode_at_past_end_is_an_error() {
        let dec = SampleDecoder::new(PrimitiveKind::Double, false, true);
        let raw = [0u8; 12];
        assert!(dec.decode_at(&raw, 4).is_ok());
        let err = dec.decode_at(&raw, 5).unwrap_err();
        assert!(matches!(err, Error::BufferTooShort { required: 13, actual: 12 }));
        assert!(dec.decode_at(&raw, usize::MAX).unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_for_format() {
        let desc = PixelFormatDescriptor::new(1, 1, 4)
            .with_float(true)
            .with_little_endian(false);
        let dec = SampleDecoder::for_format(&desc);
        assert_eq!(dec.kind(), PrimitiveKind::Float);
        assert_eq!(dec.width(), 4);
    }
}
