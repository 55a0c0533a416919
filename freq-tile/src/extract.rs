// SPDX-License-Identifier: MIT
//! Block extraction: copy the in-bounds portion of a planned input region
//! out of the source image buffer.

use crate::error::ResampleError;
use crate::types::{PixelBlock, Region};

/// Copy `region` out of `src` into a dense block.
///
/// `region` must be the real (already intersected with the image bounds)
/// portion of a planned input region; samples the ideal region wanted
/// beyond it are synthesized later by the engine from the reported padding.
/// Asking for a region outside the addressable buffer is a caller contract
/// violation and yields [`ResampleError::RegionOutOfBounds`]. An empty
/// region yields an empty block.
pub fn extract_block(src: &PixelBlock, region: &Region) -> Result<PixelBlock, ResampleError> {
    if region.is_empty() {
        return Ok(PixelBlock::zeroed(region.width, region.height));
    }
    let bounds = Region::of_extent(src.width(), src.height());
    if !bounds.contains(region) {
        return Err(ResampleError::RegionOutOfBounds {
            region: *region,
            width: src.width(),
            height: src.height(),
        });
    }

    let x0 = region.x as usize;
    let mut block = PixelBlock::zeroed(region.width, region.height);
    for row in 0..region.height {
        let src_row = src.row(region.y as usize + row);
        block
            .row_mut(row)
            .copy_from_slice(&src_row[x0..x0 + region.width]);
    }
    Ok(block)
}
