//! Rescale ranges.
//!
//! Every conversion maps decoded sample values from `[min, max]` onto the
//! display range `0..=255`. When the imaging library does not report
//! explicit bounds, they come from the primitive kind and signedness:
//!
//! | Kind | signed min | signed max | unsigned min | unsigned max |
//! |------|------------|------------|--------------|--------------|
//! | Byte | -128 | 127 | 0 | 255 |
//! | Short | -32768 | 32767 | 0 | 65535 |
//! | Int | -2147483648 | 2147483647 | 0 | 4294967295 |
//! | Float | see [`FloatSignedMin`] | `f32::MAX` | 0 | `f32::MAX` |
//! | Double | see [`FloatSignedMin`] | `f64::MAX` | 0 | `f64::MAX` |
//!
//! # Usage
//!
//! ```rust
//! use rawrgb_core::{FloatSignedMin, PrimitiveKind, RescaleRange};
//!
//! let range = RescaleRange::resolve(
//!     PrimitiveKind::Short,
//!     true,
//!     None,
//!     Some(1000.0),
//!     FloatSignedMin::default(),
//! );
//! assert_eq!(range.min, -32768.0);
//! assert_eq!(range.max, 1000.0);
//! ```

use crate::error::{Error, Result};
use crate::format::PrimitiveKind;

/// Display range upper bound.
pub const DISPLAY_MAX: f64 = 255.0;

/// Default minimum for *signed* float and double samples.
///
/// The established default is the smallest positive normal value, not the
/// most negative one, so negative samples fold back through the absolute
/// value in rescaling. `MostNegative` maps the whole signed span instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatSignedMin {
    /// `f32::MIN_POSITIVE` / `f64::MIN_POSITIVE`.
    #[default]
    SmallestPositive,
    /// `-f32::MAX` / `-f64::MAX`.
    MostNegative,
}

/// Inclusive value range mapped onto `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescaleRange {
    /// Value mapped to 0.
    pub min: f64,
    /// Value mapped to 255.
    pub max: f64,
}

impl RescaleRange {
    /// Creates a range from explicit bounds.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Type-derived default range.
    pub fn defaults(kind: PrimitiveKind, signed: bool, float_min: FloatSignedMin) -> Self {
        match (kind, signed) {
            (PrimitiveKind::Byte, true) => Self::new(i8::MIN as f64, i8::MAX as f64),
            (PrimitiveKind::Byte, false) => Self::new(0.0, u8::MAX as f64),
            (PrimitiveKind::Short, true) => Self::new(i16::MIN as f64, i16::MAX as f64),
            (PrimitiveKind::Short, false) => Self::new(0.0, u16::MAX as f64),
            (PrimitiveKind::Int, true) => Self::new(i32::MIN as f64, i32::MAX as f64),
            (PrimitiveKind::Int, false) => Self::new(0.0, u32::MAX as f64),
            (PrimitiveKind::Float, true) => {
                let min = match float_min {
                    FloatSignedMin::SmallestPositive => f32::MIN_POSITIVE,
                    FloatSignedMin::MostNegative => -f32::MAX,
                };
                Self::new(min as f64, f32::MAX as f64)
            }
            (PrimitiveKind::Float, false) => Self::new(0.0, f32::MAX as f64),
            (PrimitiveKind::Double, true) => {
                let min = match float_min {
                    FloatSignedMin::SmallestPositive => f64::MIN_POSITIVE,
                    FloatSignedMin::MostNegative => -f64::MAX,
                };
                Self::new(min, f64::MAX)
            }
            (PrimitiveKind::Double, false) => Self::new(0.0, f64::MAX),
        }
    }

    /// Resolves the effective range.
    ///
    /// Each override replaces only its own bound; the other bound still
    /// falls back to [`RescaleRange::defaults`].
    pub fn resolve(
        kind: PrimitiveKind,
        signed: bool,
        min_override: Option<f64>,
        max_override: Option<f64>,
        float_min: FloatSignedMin,
    ) -> Self {
        let defaults = Self::defaults(kind, signed, float_min);
        Self {
            min: min_override.unwrap_or(defaults.min),
            max: max_override.unwrap_or(defaults.max),
        }
    }

    /// `max - min`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Multiplier applied after subtracting `min`: `255 / (max - min)`.
    ///
    /// Zero when [`span`](Self::span) overflows to infinity; rescale against
    /// halved bounds in that case.
    #[inline]
    pub fn scale(&self) -> f64 {
        DISPLAY_MAX / self.span()
    }

    /// Rejects ranges that cannot be divided by.
    ///
    /// Equal bounds and non-finite bounds (NaN or infinite) fail with
    /// [`Error::DegenerateRange`]. Finite bounds whose difference overflows,
    /// such as `[-f64::MAX, f64::MAX]`, are accepted.
    /// Inverted ranges (`max < min`) are accepted: the absolute value taken
    /// during rescaling folds them back onto `0..=255`.
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.span() == 0.0 {
            return Err(Error::degenerate_range(self.min, self.max));
        }
        Ok(())
    }
}
