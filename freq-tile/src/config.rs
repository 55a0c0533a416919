// SPDX-License-Identifier: MIT
//! Run-wide resampling configuration.
//!
//! Built once per run, immutable, shared read-only across all tile workers.

use crate::error::ResampleError;
use crate::filter::FilterSpec;
use crate::types::{Padding, ZoomRatio};

/// Pre-processing applied to the input signal before the spectral zoom,
/// controlling edge artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecompositionPolicy {
    /// No decomposition.
    Regular,
    /// Periodic-plus-smooth splitting.
    #[default]
    PeriodicSmooth,
}

/// Spectral method used to realize upsampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZoomStrategy {
    /// Spectrum periodization; requires a loaded filter kernel.
    #[default]
    Periodization,
    /// Zero padding in the frequency domain.
    ZeroPadding,
}

/// Everything the engine and the geometry layer need for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampleConfig {
    pub zoom_ratio: ZoomRatio,
    pub filter: Option<FilterSpec>,
    pub decomposition: DecompositionPolicy,
    pub strategy: ZoomStrategy,
}

impl ResampleConfig {
    pub fn new(zoom_ratio: ZoomRatio) -> Self {
        Self {
            zoom_ratio,
            filter: None,
            decomposition: DecompositionPolicy::default(),
            strategy: ZoomStrategy::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_decomposition(mut self, decomposition: DecompositionPolicy) -> Self {
        self.decomposition = decomposition;
        self
    }

    pub fn with_strategy(mut self, strategy: ZoomStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the pre-run preconditions.
    ///
    /// Periodization upsampling demands a loaded kernel; violating that is a
    /// fatal configuration error surfaced before any tile work. A filter
    /// paired with zero-padding upsampling is advisory only.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if self.zoom_ratio.ratio() > 1.0 {
            match self.strategy {
                ZoomStrategy::Periodization if self.filter.is_none() => {
                    return Err(ResampleError::FilterRequired);
                }
                ZoomStrategy::ZeroPadding if self.filter.is_some() => {
                    log::warn!("filter will be used with zero padding upsampling");
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Margin required by the filter kernel, zero when no filter is loaded.
    pub fn filter_margin(&self) -> Padding {
        self.filter
            .as_ref()
            .map(|f| f.margin())
            .unwrap_or_default()
    }
}
