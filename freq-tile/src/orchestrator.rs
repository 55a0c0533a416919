// SPDX-License-Identifier: MIT
//! The per-run driver: plan, pad, extract, resample, reconcile, write back.
//!
//! One [`Resampler`] instance exists per resampling run. It owns the
//! immutable run configuration and the engine, exposes the host-pipeline
//! callbacks (output extent, required input region, per-tile step), and can
//! drive a whole image through a rayon worker pool.

use rayon::prelude::*;

use crate::config::ResampleConfig;
use crate::engine::FrequencyResampler;
use crate::error::ResampleError;
use crate::extract::extract_block;
use crate::plan::{output_extent, plan_input_region, reconcile_output_region, remaining_padding, tile_grid};
use crate::types::{PixelBlock, Region};

pub struct Resampler<E> {
    config: ResampleConfig,
    engine: E,
}

impl<E: FrequencyResampler> Resampler<E> {
    /// Validate the configuration and fix it for the run.
    ///
    /// The periodization-without-filter precondition fails here, before any
    /// tile is processed.
    pub fn new(config: ResampleConfig, engine: E) -> Result<Self, ResampleError> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Full output extent for a `width` x `height` input image.
    pub fn output_extent(&self, width: usize, height: usize) -> Region {
        output_extent(width, height, self.config.zoom_ratio)
    }

    /// Host-pipeline callback: the margin-expanded ideal input region
    /// required to satisfy `output_region`.
    pub fn input_region_for(&self, output_region: &Region) -> Region {
        plan_input_region(
            output_region,
            self.config.zoom_ratio,
            &self.config.filter_margin(),
        )
    }

    /// Produce one output tile from its corresponding input data.
    ///
    /// Runs the full per-tile chain and returns the reconciled output
    /// region together with the resampled block. The block may be larger
    /// than the region when the engine overshoots the output extent at the
    /// image edge; callers copy only the reconciled portion.
    pub fn process_tile(
        &self,
        src: &PixelBlock,
        tile: &Region,
    ) -> Result<(Region, PixelBlock), ResampleError> {
        let bounds = Region::of_extent(src.width(), src.height());
        let ideal = self.input_region_for(tile);
        let padding = remaining_padding(&ideal, &bounds);
        let real = ideal.intersect(&bounds);
        let block = extract_block(src, &real)?;

        log::trace!(
            "tile {tile:?}: ideal {ideal:?}, real {real:?}, padding {padding:?}"
        );
        let resampled = self.engine.resample(&block, &padding, &self.config)?;

        let extent = self.output_extent(src.width(), src.height());
        let region =
            reconcile_output_region(tile, resampled.width(), resampled.height(), &extent);
        Ok((region, resampled))
    }

    /// Resample a whole image.
    ///
    /// Partitions the output extent into tiles (respecting the
    /// `tile_width`/`tile_height` hints), processes them across the rayon
    /// pool, and assembles the output buffer. The first tile failure aborts
    /// the run; no partial output is returned.
    pub fn run(
        &self,
        src: &PixelBlock,
        tile_width: usize,
        tile_height: usize,
    ) -> Result<PixelBlock, ResampleError> {
        let extent = self.output_extent(src.width(), src.height());
        let tiles = tile_grid(&extent, tile_width, tile_height, self.config.zoom_ratio);
        log::debug!(
            "resampling {}x{} -> {}x{} across {} tiles",
            src.width(),
            src.height(),
            extent.width,
            extent.height,
            tiles.len()
        );

        let results: Vec<(Region, PixelBlock)> = tiles
            .par_iter()
            .map(|tile| self.process_tile(src, tile))
            .collect::<Result<_, _>>()?;

        let mut output = PixelBlock::zeroed(extent.width, extent.height);
        for (region, block) in &results {
            blit(&mut output, region, block);
        }
        Ok(output)
    }
}

/// Copy the reconciled portion of an engine block into the output buffer.
/// Reconciled regions never overlap, so writes are disjoint.
fn blit(dst: &mut PixelBlock, region: &Region, block: &PixelBlock) {
    let x0 = region.x as usize;
    for row in 0..region.height {
        let src = &block.row(row)[..region.width];
        let dst_row = dst.row_mut(region.y as usize + row);
        dst_row[x0..x0 + region.width].copy_from_slice(src);
    }
}
