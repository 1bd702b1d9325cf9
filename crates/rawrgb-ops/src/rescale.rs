//! Rescale and quantize.
//!
//! `byte = narrow(|(v - min) * (255 / (max - min))|)`
//!
//! The absolute value is taken *after* subtracting `min`, so values below
//! the range mirror back into it instead of going negative. Narrowing
//! follows [`OverflowPolicy`].
//!
//! When `max - min` overflows (`[-f64::MAX, f64::MAX]`), value and bounds
//! are halved first: `|(v/2 - min/2) * (255 / (max/2 - min/2))|`.

use rawrgb_core::{DISPLAY_MAX, RescaleRange, Result};

use crate::options::OverflowPolicy;

/// Maps decoded sample values onto display bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rescaler {
    /// `1.0`, or `0.5` when the span overflows.
    prescale: f64,
    min: f64,
    scale: f64,
    overflow: OverflowPolicy,
}

impl Rescaler {
    /// Creates a rescaler for a validated range.
    ///
    /// Fails with [`rawrgb_core::Error::DegenerateRange`] when `min == max`
    /// or either bound is NaN or infinite.
    pub fn new(range: &RescaleRange, overflow: OverflowPolicy) -> Result<Self> {
        range.validate()?;
        if range.span().is_finite() {
            return Ok(Self {
                prescale: 1.0,
                min: range.min,
                scale: range.scale(),
                overflow,
            });
        }

        let (min, max) = (range.min * 0.5, range.max * 0.5);
        Ok(Self {
            prescale: 0.5,
            min,
            scale: DISPLAY_MAX / (max - min),
            overflow,
        })
    }

    /// Rescaled value before narrowing.
    #[inline]
    pub fn scaled(&self, value: f64) -> f64 {
        ((value * self.prescale - self.min) * self.scale).abs()
    }

    /// Rescales and narrows one sample.
    ///
    /// # Example
    /// ```rust
    /// use rawrgb_core::RescaleRange;
    /// use rawrgb_ops::{OverflowPolicy, Rescaler};
    ///
    /// let r = Rescaler::new(&RescaleRange::new(0.0, 65535.0), OverflowPolicy::Wrap).unwrap();
    /// assert_eq!(r.quantize(0.0), 0);
    /// assert_eq!(r.quantize(65535.0), 255);
    /// assert_eq!(r.quantize(32768.0), 127);
    /// ```
    #[inline]
    pub fn quantize(&self, value: f64) -> u8 {
        let scaled = self.scaled(value);
        match self.overflow {
            OverflowPolicy::Wrap => scaled as i32 as u8,
            OverflowPolicy::Clamp => scaled as u8,
        }
    }
}
