//! Conversion options.
//!
//! The defaults reproduce established output byte for byte. Each knob
//! that departs from that is opt-in.
//!
//! ```rust
//! use rawrgb_ops::{ConvertOptions, OverflowPolicy};
//! use rawrgb_core::FloatSignedMin;
//!
//! let opts = ConvertOptions::default()
//!     .with_overflow(OverflowPolicy::Clamp)
//!     .with_float_signed_min(FloatSignedMin::MostNegative);
//! assert_eq!(opts.overflow, OverflowPolicy::Clamp);
//! ```

use rawrgb_core::FloatSignedMin;

/// Default number of output samples at which conversion goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// How rescaled values above 255 are narrowed to a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Truncate to a 32-bit integer (saturating), then keep the low 8 bits.
    ///
    /// 256.0 becomes 0, 300.7 becomes 44. NaN becomes 0.
    #[default]
    Wrap,
    /// Saturate at 255. NaN becomes 0.
    Clamp,
}

/// Options for [`convert_with`](crate::convert_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// Default minimum for signed float and double samples.
    pub float_signed_min: FloatSignedMin,
    /// Narrowing of out-of-range rescaled values.
    pub overflow: OverflowPolicy,
    /// Output sample count at which the `parallel` feature kicks in.
    ///
    /// Ignored without the `parallel` feature.
    pub parallel_threshold: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            float_signed_min: FloatSignedMin::default(),
            overflow: OverflowPolicy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ConvertOptions {
    /// Sets the signed float minimum policy.
    pub fn with_float_signed_min(mut self, policy: FloatSignedMin) -> Self {
        self.float_signed_min = policy;
        self
    }

    /// Sets the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Sets the parallel threshold. `usize::MAX` forces serial conversion.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Forces serial conversion.
    pub fn serial(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.float_signed_min, FloatSignedMin::SmallestPositive);
        assert_eq!(opts.overflow, OverflowPolicy::Wrap);
        assert_eq!(opts.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_serial() {
        assert_eq!(ConvertOptions::default().serial().parallel_threshold, usize::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_config() {
        let opts: ConvertOptions = serde_json::from_str(r#"{"overflow":"Clamp"}"#).unwrap();
        assert_eq!(opts.overflow, OverflowPolicy::Clamp);
        assert_eq!(opts.float_signed_min, FloatSignedMin::SmallestPositive);
        assert_eq!(opts.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);

        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"Clamp\""));
    }
}
