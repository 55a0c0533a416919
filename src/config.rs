//! CLI-level configuration and zoom-strategy resolution.
//!
//! Bridges the parsed command line to the core [`ResampleConfig`]. The
//! effective zoom strategy depends on both the flags and whether a filter
//! kernel was actually loaded, so resolution happens here, after filter
//! loading, with every decision logged.

use std::path::PathBuf;

use freq_tile::{
    DecompositionPolicy, FilterSpec, PaddingMode, PixelBlock, ResampleConfig, ResampleError,
    ZoomRatio, ZoomStrategy,
};

/// Everything the front end collects before a run.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Resampling ratio text, `I` or `I:O`.
    pub ratio: String,
    /// Skip the periodic-plus-smooth input decomposition.
    pub no_image_decomposition: bool,
    /// Force periodization as the upsampling algorithm.
    pub force_periodization: bool,
    /// Force zero padding as the upsampling algorithm.
    pub force_zero_padding: bool,
    /// Path to the filter image applied to the zoomed image.
    pub filter_path: Option<PathBuf>,
    /// Normalize filter coefficients.
    pub normalize: bool,
    /// Zero-pad real input edges instead of mirroring them.
    pub zero_pad_real_edges: bool,
    /// Filter hot point; `None` means kernel center.
    pub hot_point: Option<(usize, usize)>,
    /// Output tile size hint, pixels per side.
    pub tile_size: usize,
}

impl AppConfig {
    /// Resolve the run configuration once the filter kernel (if any) has
    /// been loaded.
    ///
    /// For upsampling ratios, periodization is the default when a filter is
    /// loaded and zero padding otherwise; forcing periodization without a
    /// filter is a fatal configuration error, and pairing a filter with
    /// forced zero padding only warns.
    pub fn resolve(&self, kernel: Option<PixelBlock>) -> Result<ResampleConfig, ResampleError> {
        let zoom_ratio = ZoomRatio::parse(&self.ratio)?;

        let padding_mode = if self.zero_pad_real_edges {
            PaddingMode::Zero
        } else {
            PaddingMode::Mirror
        };
        let filter = kernel
            .map(|k| FilterSpec::new(k, self.hot_point, padding_mode, self.normalize))
            .transpose()?;

        let decomposition = if self.no_image_decomposition {
            log::info!("image decomposition: none");
            DecompositionPolicy::Regular
        } else {
            log::info!("image decomposition: periodic plus smooth");
            DecompositionPolicy::PeriodicSmooth
        };

        let mut strategy = ZoomStrategy::Periodization;
        if zoom_ratio.ratio() > 1.0 {
            // The upsampling algorithm only matters for ratio > 1.
            if self.force_periodization && filter.is_none() {
                log::error!("filter is required with periodization upsampling");
                return Err(ResampleError::FilterRequired);
            } else if self.force_zero_padding || filter.is_none() {
                log::info!("upsampling: zero padding");
                strategy = ZoomStrategy::ZeroPadding;
                if filter.is_some() {
                    log::warn!("filter will be used with zero padding upsampling");
                }
            } else {
                log::info!("upsampling: periodization");
            }
        }

        let mut config = ResampleConfig::new(zoom_ratio)
            .with_decomposition(decomposition)
            .with_strategy(strategy);
        if let Some(filter) = filter {
            config = config.with_filter(filter);
        }
        config.validate()?;
        Ok(config)
    }
}
