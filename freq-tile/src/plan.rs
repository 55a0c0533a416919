// SPDX-License-Identifier: MIT
//! Region planning: output extent, per-tile input regions, remaining
//! padding, tile grids, and output region reconciliation.
//!
//! All functions here are pure geometry over [`Region`] values. The inverse
//! of the zoom ratio maps output coordinates to input coordinates
//! (`input = output * o / i`); starts are floored and ends are ceiled so a
//! planned region covers every input sample that can influence the tile.

use crate::types::{Padding, Region, ZoomRatio};

/// Full output extent for a `width` x `height` input image.
pub fn output_extent(width: usize, height: usize, ratio: ZoomRatio) -> Region {
    Region::of_extent(ratio.scale_len(width), ratio.scale_len(height))
}

/// Ideal input region needed to produce `output_tile`.
///
/// The tile is mapped back to the input grid by the inverse ratio, rounded
/// outward, then grown by `margin` so the engine has enough spatial context
/// to apply the filter kernel without seam artifacts. The result may extend
/// past the image bounds; see [`remaining_padding`]. Callers must not
/// shrink it.
pub fn plan_input_region(output_tile: &Region, ratio: ZoomRatio, margin: &Padding) -> Region {
    let i = i64::from(ratio.input());
    let o = i64::from(ratio.output());
    let x0 = div_floor(output_tile.x * o, i);
    let y0 = div_floor(output_tile.y * o, i);
    let x1 = div_ceil(output_tile.end_x() * o, i);
    let y1 = div_ceil(output_tile.end_y() * o, i);
    Region::new(x0, y0, (x1 - x0) as usize, (y1 - y0) as usize).grow(margin)
}

/// How much of `ideal` falls outside `bounds`, per side.
///
/// This is the amount of border the engine must synthesize (mirror or zero)
/// rather than read from real pixels. A degenerate tile entirely outside
/// the image on an axis reports the full requested margin and leaves an
/// empty extractable portion; that is not an error. The per-side amounts
/// are capped so that `ideal == intersection + padding` holds on each axis.
pub fn remaining_padding(ideal: &Region, bounds: &Region) -> Padding {
    let left = clamped(bounds.x - ideal.x, ideal.width);
    let right = clamped(ideal.end_x() - bounds.end_x(), ideal.width - left);
    let top = clamped(bounds.y - ideal.y, ideal.height);
    let bottom = clamped(ideal.end_y() - bounds.end_y(), ideal.height - top);
    Padding::new(top, bottom, left, right)
}

fn clamped(deficit: i64, limit: usize) -> usize {
    (deficit.max(0) as usize).min(limit)
}

/// Final shape of a tile once the engine has produced its block.
///
/// The engine-reported block size is ground truth for the tile's size; the
/// declared origin is kept and the size is clamped so the tile never
/// extends past the output extent. With grids from [`tile_grid`] the
/// reconciled tiles exactly partition the extent.
pub fn reconcile_output_region(
    declared: &Region,
    engine_width: usize,
    engine_height: usize,
    extent: &Region,
) -> Region {
    let width = engine_width.min((extent.end_x() - declared.x).max(0) as usize);
    let height = engine_height.min((extent.end_y() - declared.y).max(0) as usize);
    Region::new(declared.x, declared.y, width, height)
}

/// Partition an output extent into disjoint tiles.
///
/// Interior tile boundaries are aligned to multiples of `ratio.input()` per
/// axis, where the inverse rational map lands on integer input coordinates,
/// so interior tiles resample exactly; the last tile per axis takes the
/// remainder. `tile_width`/`tile_height` are hints rounded up to the
/// alignment step.
pub fn tile_grid(
    extent: &Region,
    tile_width: usize,
    tile_height: usize,
    ratio: ZoomRatio,
) -> Vec<Region> {
    let step_x = aligned_step(tile_width, ratio.input() as usize);
    let step_y = aligned_step(tile_height, ratio.input() as usize);
    let mut tiles = Vec::new();
    let mut y = extent.y;
    while y < extent.end_y() {
        let h = step_y.min((extent.end_y() - y) as usize);
        let mut x = extent.x;
        while x < extent.end_x() {
            let w = step_x.min((extent.end_x() - x) as usize);
            tiles.push(Region::new(x, y, w, h));
            x += w as i64;
        }
        y += h as i64;
    }
    tiles
}

fn aligned_step(hint: usize, align: usize) -> usize {
    hint.max(1).div_ceil(align) * align
}

// Both helpers assume a positive divisor.
fn div_floor(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

fn div_ceil(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}
