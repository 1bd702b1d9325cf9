//! 8-bit interleaved RGB images.

use rawrgb_core::CHANNELS;

use crate::error::{IoError, IoResult};

/// 24-bit interleaved RGB pixel buffer (R, G, B, R, G, B, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Wraps a converted buffer.
    ///
    /// `data` must hold exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> IoResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or_else(|| IoError::InvalidImage(format!("{width}x{height} overflows")))?;
        if data.len() != expected {
            return Err(IoError::InvalidImage(format!(
                "expected {} bytes for {}x{} RGB, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// RGB triple at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Interleaved RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image, returning its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_access() {
        let img = RgbImage::from_raw(2, 2, (0..12).collect()).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.pixel(0, 0), Some([0, 1, 2]));
        assert_eq!(img.pixel(1, 0), Some([3, 4, 5]));
        assert_eq!(img.pixel(1, 1), Some([9, 10, 11]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel(0, 2), None);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            RgbImage::from_raw(2, 2, vec![0; 11]),
            Err(IoError::InvalidImage(_))
        ));
        assert!(RgbImage::from_raw(0, 5, Vec::new()).is_ok());
    }

    #[test]
    fn test_into_raw() {
        let img = RgbImage::from_raw(1, 1, vec![7, 8, 9]).unwrap();
        assert_eq!(img.as_bytes(), &[7, 8, 9]);
        assert_eq!(img.into_raw(), vec![7, 8, 9]);
    }
}
