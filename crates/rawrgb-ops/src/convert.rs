//! Raw buffer to 8-bit interleaved RGB.
//!
//! Resolves the rescale range once, then walks the raw buffer and writes
//! one output byte per input sample.
//!
//! # Layouts
//!
//! - **Interleaved**: output byte `i` comes from the sample at byte
//!   `i * bytes_per_sample`. The raw data is already RGBRGB..., so the
//!   output is too.
//! - **Planar**: the raw buffer holds three `width * height` planes, R then
//!   G then B. Output bytes `3i, 3i+1, 3i+2` come from samples `i`,
//!   `plane + i` and `2 * plane + i`.
//!
//! The output always holds `raw.len() / bytes_per_sample` bytes. Bytes
//! past `3 * width * height` are converted in interleaved mode and left
//! zero in planar mode.
//!
//! # Example
//!
//! ```rust
//! use rawrgb_ops::convert;
//!
//! // One 16-bit signed little-endian pixel: -32768, 0, 32767
//! let raw = [0x00, 0x80, 0x00, 0x00, 0xFF, 0x7F];
//! let rgb = convert(&raw, 1, 1, 2, false, true, true, true, None, None).unwrap();
//! assert_eq!(rgb, vec![0, 127, 255]);
//! ```

use rawrgb_core::{
    CHANNELS, PixelFormatDescriptor, PrimitiveKind, RescaleRange, Result, SampleDecoder,
};
use tracing::{debug, trace, warn};

use crate::options::ConvertOptions;
use crate::rescale::Rescaler;

/// Converts a raw sample buffer with default [`ConvertOptions`].
///
/// `min` and `max` replace the type-derived range bounds independently.
///
/// # Errors
///
/// - [`rawrgb_core::Error::InvalidFormat`] for `bytes_per_sample == 0`
/// - [`rawrgb_core::Error::BufferTooShort`] when `raw` is shorter than
///   `width * height * 3 * bytes_per_sample`
/// - [`rawrgb_core::Error::DegenerateRange`] when the resolved range is empty
#[allow(clippy::too_many_arguments)]
pub fn convert(
    raw: &[u8],
    width: u32,
    height: u32,
    bytes_per_sample: u8,
    is_float: bool,
    interleaved: bool,
    is_signed: bool,
    is_little_endian: bool,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<Vec<u8>> {
    let desc = PixelFormatDescriptor {
        width,
        height,
        bytes_per_sample,
        is_float,
        is_signed,
        is_little_endian,
        interleaved,
        min_override: min,
        max_override: max,
    };
    convert_with(raw, &desc, &ConvertOptions::default())
}

/// Converts a raw sample buffer described by `desc`.
pub fn convert_with(
    raw: &[u8],
    desc: &PixelFormatDescriptor,
    opts: &ConvertOptions,
) -> Result<Vec<u8>> {
    trace!(
        width = desc.width,
        height = desc.height,
        bytes_per_sample = desc.bytes_per_sample,
        interleaved = desc.interleaved,
        len = raw.len(),
        "convert"
    );
    desc.validate(raw)?;
    if !PrimitiveKind::is_supported_width(desc.bytes_per_sample) {
        warn!(
            bytes_per_sample = desc.bytes_per_sample,
            "unsupported sample width, reading samples as bytes"
        );
    }

    let kind = desc.kind();
    let range = RescaleRange::resolve(
        kind,
        desc.is_signed,
        desc.min_override,
        desc.max_override,
        opts.float_signed_min,
    );
    debug!(
        %kind,
        bytes_per_sample = desc.bytes_per_sample,
        min = range.min,
        max = range.max,
        "resolved rescale range"
    );

    let sampler = Sampler {
        raw,
        stride: desc.bytes_per_sample as usize,
        decoder: SampleDecoder::for_format(desc),
        rescaler: Rescaler::new(&range, opts.overflow)?,
    };
    let layout = if desc.interleaved {
        Layout::Interleaved
    } else {
        Layout::Planar {
            plane_len: desc.sample_count()? / CHANNELS,
        }
    };

    let mut out = vec![0u8; desc.output_len(raw.len())];
    fill(&sampler, layout, &mut out, opts);
    Ok(out)
}

/// Source sample order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    Interleaved,
    Planar { plane_len: usize },
}

/// Reads and quantizes the `n`-th sample of a validated raw buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sampler<'a> {
    raw: &'a [u8],
    stride: usize,
    decoder: SampleDecoder,
    rescaler: Rescaler,
}

impl Sampler<'_> {
    #[inline]
    pub(crate) fn sample(&self, n: usize) -> u8 {
        let offset = n * self.stride;
        let value = self.decoder.decode(&self.raw[offset..offset + self.stride]);
        self.rescaler.quantize(value)
    }
}

fn fill(sampler: &Sampler<'_>, layout: Layout, out: &mut [u8], opts: &ConvertOptions) {
    #[cfg(feature = "parallel")]
    {
        if out.len() >= opts.parallel_threshold {
            crate::parallel::fill(sampler, layout, out);
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = opts;

    match layout {
        Layout::Interleaved => {
            for (n, byte) in out.iter_mut().enumerate() {
                *byte = sampler.sample(n);
            }
        }
        Layout::Planar { plane_len } => {
            for (i, px) in out[..plane_len * CHANNELS]
                .chunks_exact_mut(CHANNELS)
                .enumerate()
            {
                fill_planar_pixel(sampler, plane_len, i, px);
            }
        }
    }
}

#[inline]
pub(crate) fn fill_planar_pixel(sampler: &Sampler<'_>, plane_len: usize, i: usize, px: &mut [u8]) {
    for (c, byte) in px.iter_mut().enumerate() {
        *byte = sampler.sample(c * plane_len + i);
    }
}
