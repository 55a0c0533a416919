// SPDX-License-Identifier: MIT
//! The engine seam and a zero-order reference engine.
//!
//! The geometry layer treats the spectral resampler as an opaque, stateless
//! function of a pixel block and a parameter set. Real deployments plug
//! their spectral implementation in through [`FrequencyResampler`];
//! [`ZeroOrderZoom`] exists so the pipeline runs end to end and the geometry
//! contract is testable without one.

use crate::config::ResampleConfig;
use crate::error::ResampleError;
use crate::extract::extract_block;
use crate::filter::PaddingMode;
use crate::types::{Padding, PixelBlock, Region};

/// External frequency-domain resampling engine.
///
/// `resample` receives the real (in-bounds) samples of a planned input
/// region plus the per-side padding the engine must synthesize, and returns
/// the resampled block for the corresponding output tile. Implementations
/// must be safe to invoke concurrently from independent workers with
/// independent blocks; the `Send + Sync` bound encodes that contract, so a
/// stateful engine has to bring its own interior synchronization.
pub trait FrequencyResampler: Send + Sync {
    fn resample(
        &self,
        block: &PixelBlock,
        padding: &Padding,
        config: &ResampleConfig,
    ) -> Result<PixelBlock, ResampleError>;
}

impl<T: FrequencyResampler + ?Sized> FrequencyResampler for &T {
    fn resample(
        &self,
        block: &PixelBlock,
        padding: &Padding,
        config: &ResampleConfig,
    ) -> Result<PixelBlock, ResampleError> {
        (**self).resample(block, padding, config)
    }
}

/// Zero-order (nearest-neighbor) reference engine.
///
/// Honors the full geometry contract: it reconstructs the ideal block by
/// synthesizing the reported padding (mirror reflection or zero fill per
/// the filter's padding mode), strips the filter margin, and scales each
/// axis to `ceil(len * i / o)`. It performs no spectral mathematics and
/// ignores the decomposition policy and zoom strategy; the kernel
/// coefficients are not applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroOrderZoom;

impl FrequencyResampler for ZeroOrderZoom {
    fn resample(
        &self,
        block: &PixelBlock,
        padding: &Padding,
        config: &ResampleConfig,
    ) -> Result<PixelBlock, ResampleError> {
        let mode = config
            .filter
            .as_ref()
            .map(|f| f.padding_mode())
            .unwrap_or_default();
        let ideal = synthesize_border(block, padding, mode);

        let margin = config.filter_margin();
        if ideal.width() <= margin.horizontal() || ideal.height() <= margin.vertical() {
            return Err(ResampleError::engine(anyhow::anyhow!(
                "padded block {}x{} does not cover the {}x{} filter margin",
                ideal.width(),
                ideal.height(),
                margin.horizontal(),
                margin.vertical()
            )));
        }
        let inner = extract_block(
            &ideal,
            &Region::new(
                margin.left as i64,
                margin.top as i64,
                ideal.width() - margin.horizontal(),
                ideal.height() - margin.vertical(),
            ),
        )?;

        Ok(scale_nearest(&inner, config))
    }
}

/// Rebuild the ideal block around the real samples.
///
/// Positions outside the real region are filled by symmetric reflection of
/// the real samples (period `2 * len`) or by zeros. With no real samples to
/// reflect, mirror synthesis degrades to zero fill.
fn synthesize_border(block: &PixelBlock, padding: &Padding, mode: PaddingMode) -> PixelBlock {
    if padding.is_zero() {
        return block.clone();
    }
    let width = block.width() + padding.horizontal();
    let height = block.height() + padding.vertical();
    let mut ideal = PixelBlock::zeroed(width, height);
    if block.is_empty() {
        return ideal;
    }

    match mode {
        PaddingMode::Zero => {
            for y in 0..block.height() {
                let dst = ideal.row_mut(padding.top + y);
                dst[padding.left..padding.left + block.width()].copy_from_slice(block.row(y));
            }
        }
        PaddingMode::Mirror => {
            let col_map: Vec<usize> = (0..width)
                .map(|x| reflect(x as i64 - padding.left as i64, block.width() as i64))
                .collect();
            for y in 0..height {
                let src = block.row(reflect(y as i64 - padding.top as i64, block.height() as i64));
                let dst = ideal.row_mut(y);
                for (x, &sx) in col_map.iter().enumerate() {
                    dst[x] = src[sx];
                }
            }
        }
    }
    ideal
}

fn reflect(idx: i64, len: i64) -> usize {
    let idx = idx.rem_euclid(2 * len);
    if idx < len {
        idx as usize
    } else {
        (2 * len - 1 - idx) as usize
    }
}

fn scale_nearest(block: &PixelBlock, config: &ResampleConfig) -> PixelBlock {
    let ratio = config.zoom_ratio;
    if ratio.is_identity() {
        return block.clone();
    }
    let (i, o) = (ratio.input() as usize, ratio.output() as usize);
    let out_w = ratio.scale_len(block.width());
    let out_h = ratio.scale_len(block.height());
    let mut out = PixelBlock::zeroed(out_w, out_h);
    for oy in 0..out_h {
        let src = block.row(oy * o / i);
        let dst = out.row_mut(oy);
        for (ox, sample) in dst.iter_mut().enumerate() {
            *sample = src[ox * o / i];
        }
    }
    out
}
