//! Benchmark fixtures for rawrgb.
//!
//! Run with: `cargo bench -p rawrgb-bench`

#![warn(missing_docs)]

use rawrgb_core::PixelFormatDescriptor;

/// Deterministic raw buffer for `desc`, filled with a multiplicative hash.
pub fn synthetic_raw(desc: &PixelFormatDescriptor) -> Vec<u8> {
    let len = desc.required_len().unwrap_or(0);
    (0..len)
        .map(|i| ((i as u32).wrapping_mul(2654435761) >> 24) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_covers_the_whole_image() {
        let desc = PixelFormatDescriptor::new(64, 32, 8).with_float(true);
        let raw = synthetic_raw(&desc);
        assert_eq!(raw.len(), desc.required_len().unwrap());
        assert_eq!(synthetic_raw(&desc), raw);
    }
}
