//! Library entry for the `fresample` binary: image and filter loading,
//! configuration resolution, the resampling run, and output encoding.
//!
//! The tile geometry and the engine seam live in the `freq-tile` crate;
//! this crate only adapts files on disk to pixel blocks and back. Images
//! are processed as single-channel luma in `f64`.

pub mod config;

use std::path::Path;

use anyhow::{Context, Result};
use freq_tile::{PixelBlock, Resampler, ZeroOrderZoom};

use crate::config::AppConfig;

/// Run one resampling pass: `input` -> `output` per `config`.
pub fn run(config: &AppConfig, input: &Path, output: &Path) -> Result<()> {
    let src = load_luma(input)?;
    log::info!("input image: {}x{}", src.width(), src.height());

    let kernel = match &config.filter_path {
        Some(path) => {
            log::info!("filter path: {}", path.display());
            Some(load_luma(path)?)
        }
        None => None,
    };

    let resample_config = config.resolve(kernel)?;
    let resampler = Resampler::new(resample_config, ZeroOrderZoom)?;
    let out = resampler.run(&src, config.tile_size, config.tile_size)?;
    log::info!("output image: {}x{}", out.width(), out.height());

    save_luma(&out, output)
}

fn load_luma(path: &Path) -> Result<PixelBlock> {
    let img = image::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?
        .to_luma32f();
    let (width, height) = img.dimensions();
    let data = img.into_raw().into_iter().map(f64::from).collect();
    Ok(PixelBlock::from_vec(width as usize, height as usize, data)?)
}

fn save_luma(block: &PixelBlock, path: &Path) -> Result<()> {
    let bytes: Vec<u8> = block
        .data()
        .iter()
        .map(|&v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect();
    let img = image::GrayImage::from_raw(block.width() as u32, block.height() as u32, bytes)
        .context("output buffer does not match its dimensions")?;
    img.save(path)
        .with_context(|| format!("cannot write {}", path.display()))
}
