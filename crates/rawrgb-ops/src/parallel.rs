//! Parallel layout rewriting using Rayon.
//!
//! Every output byte depends only on its own input sample and the shared
//! read-only rescaler, so the output is split into independent chunks.
//! Results are byte-identical to the serial walk.

use rawrgb_core::CHANNELS;
use rayon::prelude::*;

use crate::convert::{Layout, Sampler, fill_planar_pixel};

/// Output samples per interleaved work item.
const SAMPLES_PER_CHUNK: usize = 16 * 1024;

/// Pixels per planar work item.
const PIXELS_PER_CHUNK: usize = SAMPLES_PER_CHUNK / CHANNELS;

pub(crate) fn fill(sampler: &Sampler<'_>, layout: Layout, out: &mut [u8]) {
    match layout {
        Layout::Interleaved => {
            out.par_chunks_mut(SAMPLES_PER_CHUNK)
                .enumerate()
                .for_each(|(chunk, bytes)| {
                    let base = chunk * SAMPLES_PER_CHUNK;
                    for (j, byte) in bytes.iter_mut().enumerate() {
                        *byte = sampler.sample(base + j);
                    }
                });
        }
        Layout::Planar { plane_len } => {
            out[..plane_len * CHANNELS]
                .par_chunks_mut(PIXELS_PER_CHUNK * CHANNELS)
                .enumerate()
                .for_each(|(chunk, bytes)| {
                    let base = chunk * PIXELS_PER_CHUNK;
                    for (j, px) in bytes.chunks_exact_mut(CHANNELS).enumerate() {
                        fill_planar_pixel(sampler, plane_len, base + j, px);
                    }
                });
        }
    }
}
