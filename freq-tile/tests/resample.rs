// SPDX-License-Identifier: MIT
//! End-to-end scenarios over the tile orchestration layer with the
//! zero-order reference engine.

use std::sync::atomic::{AtomicUsize, Ordering};

use freq_tile::{
    extract_block, output_extent, plan_input_region, remaining_padding, tile_grid, FilterSpec,
    FrequencyResampler, Padding, PaddingMode, PixelBlock, Region, ResampleConfig, ResampleError,
    Resampler, ZeroOrderZoom, ZoomRatio, ZoomStrategy,
};

fn gradient(width: usize, height: usize) -> PixelBlock {
    let data = (0..width * height).map(|i| i as f64).collect();
    PixelBlock::from_vec(width, height, data).unwrap()
}

/// Counts engine invocations, to prove configuration errors abort before
/// any tile work.
struct CountingEngine {
    calls: AtomicUsize,
    inner: ZeroOrderZoom,
}

impl CountingEngine {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            inner: ZeroOrderZoom,
        }
    }
}

impl FrequencyResampler for CountingEngine {
    fn resample(
        &self,
        block: &PixelBlock,
        padding: &Padding,
        config: &ResampleConfig,
    ) -> Result<PixelBlock, ResampleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resample(block, padding, config)
    }
}

/// An engine that always fails, to prove engine errors are fatal for the
/// whole run.
struct FailingEngine;

impl FrequencyResampler for FailingEngine {
    fn resample(
        &self,
        _block: &PixelBlock,
        _padding: &Padding,
        _config: &ResampleConfig,
    ) -> Result<PixelBlock, ResampleError> {
        Err(ResampleError::engine(anyhow::anyhow!("malformed block")))
    }
}

#[test]
fn identity_ratio_is_a_no_op() {
    let cfg = ResampleConfig::new(ZoomRatio::new(1, 1).unwrap());
    let resampler = Resampler::new(cfg, ZeroOrderZoom).unwrap();
    let src = gradient(7, 5);
    let out = resampler.run(&src, 3, 3).unwrap();
    assert_eq!(out, src);
}

#[test]
fn double_upsample_of_4x4_produces_8x8() {
    let cfg = ResampleConfig::new(ZoomRatio::new(2, 1).unwrap())
        .with_strategy(ZoomStrategy::ZeroPadding);
    let resampler = Resampler::new(cfg, ZeroOrderZoom).unwrap();
    let src = gradient(4, 4);

    let extent = resampler.output_extent(4, 4);
    assert_eq!(extent, Region::of_extent(8, 8));

    // Two adjacent 4x4 output tiles share no pixel and cover their band.
    let left = resampler.process_tile(&src, &Region::new(0, 0, 4, 4)).unwrap();
    let right = resampler.process_tile(&src, &Region::new(4, 0, 4, 4)).unwrap();
    assert_eq!(left.0, Region::new(0, 0, 4, 4));
    assert_eq!(right.0, Region::new(4, 0, 4, 4));
    assert!(left.0.intersect(&right.0).is_empty());
    assert_eq!(left.0.area() + right.0.area(), 8 * 4);

    // Whole-image run: every input sample expands to a 2x2 patch.
    let out = resampler.run(&src, 4, 4).unwrap();
    assert_eq!((out.width(), out.height()), (8, 8));
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(out.get(x, y), src.get(x / 2, y / 2), "({x}, {y})");
        }
    }
}

#[test]
fn reconciled_tiles_partition_the_output_exactly() {
    for &(w, h, i, o, tile) in &[
        (4usize, 4usize, 2u32, 1u32, 4usize),
        (5, 3, 3, 2, 4),
        (9, 9, 1, 1, 4),
        (8, 8, 1, 2, 3),
        (5, 5, 3, 1, 2),
    ] {
        let ratio = ZoomRatio::new(i, o).unwrap();
        let cfg = ResampleConfig::new(ratio).with_strategy(ZoomStrategy::ZeroPadding);
        let resampler = Resampler::new(cfg, ZeroOrderZoom).unwrap();
        let src = gradient(w, h);
        let extent = resampler.output_extent(w, h);

        let mut covered = vec![0u8; extent.area()];
        for tile_region in tile_grid(&extent, tile, tile, ratio) {
            let (region, block) = resampler.process_tile(&src, &tile_region).unwrap();
            assert_eq!(region.x, tile_region.x);
            assert_eq!(region.y, tile_region.y);
            assert!(block.width() >= region.width);
            assert!(block.height() >= region.height);
            for y in region.y..region.end_y() {
                for x in region.x..region.end_x() {
                    covered[y as usize * extent.width + x as usize] += 1;
                }
            }
        }
        assert!(
            covered.iter().all(|&c| c == 1),
            "{w}x{h} at {i}:{o} not partitioned exactly"
        );
    }
}

#[test]
fn ideal_region_equals_real_plus_padding() {
    let ratio = ZoomRatio::new(3, 2).unwrap();
    let margin = Padding::new(2, 2, 2, 2);
    let bounds = Region::of_extent(5, 5);
    let extent = output_extent(5, 5, ratio);
    for tile in tile_grid(&extent, 3, 3, ratio) {
        let ideal = plan_input_region(&tile, ratio, &margin);
        let padding = remaining_padding(&ideal, &bounds);
        let real = ideal.intersect(&bounds);
        assert_eq!(real.width + padding.horizontal(), ideal.width);
        assert_eq!(real.height + padding.vertical(), ideal.height);
    }
}

#[test]
fn corner_tile_with_oversized_margin_reports_full_padding() {
    // 7x7 kernel on a 2x2 image: the margin exceeds the image extent.
    let kernel = PixelBlock::from_vec(7, 7, vec![1.0; 49]).unwrap();
    let filter = FilterSpec::new(kernel, None, PaddingMode::Mirror, false).unwrap();
    let cfg = ResampleConfig::new(ZoomRatio::new(1, 1).unwrap()).with_filter(filter);
    let resampler = Resampler::new(cfg, ZeroOrderZoom).unwrap();

    let tile = Region::new(0, 0, 2, 2);
    let ideal = resampler.input_region_for(&tile);
    assert_eq!(ideal, Region::new(-3, -3, 8, 8));

    let bounds = Region::of_extent(2, 2);
    let padding = remaining_padding(&ideal, &bounds);
    assert_eq!(padding, Padding::new(3, 3, 3, 3));

    let real = ideal.intersect(&bounds);
    let block = extract_block(&gradient(2, 2), &real).unwrap();
    assert_eq!((block.width(), block.height()), (2, 2));

    // The full run still produces a tile of the expected size.
    let out = resampler.run(&gradient(2, 2), 2, 2).unwrap();
    assert_eq!((out.width(), out.height()), (2, 2));
}

#[test]
fn margin_fully_outside_a_tiny_image_is_not_an_error() {
    // A tile whose ideal region lies entirely outside the image on one
    // axis: padding covers the whole requested extent, zero real pixels.
    let bounds = Region::of_extent(3, 3);
    let ideal = Region::new(-5, 0, 4, 3);
    let padding = remaining_padding(&ideal, &bounds);
    assert_eq!(padding.left, 4);
    assert_eq!(padding.right, 0);
    assert!(ideal.intersect(&bounds).is_empty());
}

#[test]
fn periodization_without_filter_aborts_before_any_tile() {
    let engine = CountingEngine::new();
    let cfg = ResampleConfig::new(ZoomRatio::new(3, 2).unwrap());
    assert!(cfg.strategy == ZoomStrategy::Periodization);
    match Resampler::new(cfg, &engine) {
        Err(ResampleError::FilterRequired) => {}
        Err(other) => panic!("expected FilterRequired, got {other:?}"),
        Ok(_) => panic!("expected FilterRequired, construction succeeded"),
    }
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn counting_engine_sees_every_tile() {
    let engine = CountingEngine::new();
    let cfg = ResampleConfig::new(ZoomRatio::new(2, 1).unwrap())
        .with_strategy(ZoomStrategy::ZeroPadding);
    let resampler = Resampler::new(cfg, &engine).unwrap();
    let out = resampler.run(&gradient(4, 4), 4, 4).unwrap();
    assert_eq!((out.width(), out.height()), (8, 8));
    // 8x8 output with 4x4 tiles: four tiles, four engine calls.
    assert_eq!(engine.calls.load(Ordering::SeqCst), 4);
}

#[test]
fn engine_failure_aborts_the_run() {
    let cfg = ResampleConfig::new(ZoomRatio::new(2, 1).unwrap())
        .with_strategy(ZoomStrategy::ZeroPadding);
    let resampler = Resampler::new(cfg, FailingEngine).unwrap();
    match resampler.run(&gradient(4, 4), 2, 2) {
        Err(ResampleError::Engine(_)) => {}
        other => panic!("expected engine failure, got {other:?}"),
    }
}

#[test]
fn filtered_upsample_matches_unfiltered_geometry() {
    // The reference engine ignores the coefficients, so a filtered run must
    // produce the same extent and tiling as an unfiltered one; only the
    // margins differ on the input side.
    let kernel = PixelBlock::from_vec(3, 3, vec![1.0; 9]).unwrap();
    let filter = FilterSpec::new(kernel, None, PaddingMode::Zero, false).unwrap();
    let cfg = ResampleConfig::new(ZoomRatio::new(2, 1).unwrap()).with_filter(filter);
    let resampler = Resampler::new(cfg, ZeroOrderZoom).unwrap();
    let out = resampler.run(&gradient(4, 4), 4, 4).unwrap();
    assert_eq!((out.width(), out.height()), (8, 8));
}
