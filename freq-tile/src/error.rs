// SPDX-License-Identifier: MIT
//! Error taxonomy for the resampling core.
//!
//! Configuration errors ([`ResampleError::InvalidZoomRatio`],
//! [`ResampleError::MalformedZoomRatio`], [`ResampleError::FilterRequired`])
//! surface before any tile work begins. Geometry contract violations
//! ([`ResampleError::RegionOutOfBounds`], [`ResampleError::SizeMismatch`])
//! indicate a caller bug, not a data error. Any engine failure aborts the
//! whole run; no partial output is committed.

use thiserror::Error;

use crate::types::Region;

#[derive(Debug, Error)]
pub enum ResampleError {
    /// A zoom ratio term was zero. Both terms must be positive integers.
    #[error("invalid zoom ratio {input}:{output}: both terms must be positive")]
    InvalidZoomRatio { input: u32, output: u32 },

    /// A textual zoom ratio did not match `I` or `I:O`.
    #[error("malformed zoom ratio {0:?}: expected `I` or `I:O`")]
    MalformedZoomRatio(String),

    /// Periodization upsampling was selected without a loaded filter kernel.
    #[error("periodization upsampling requires a filter kernel")]
    FilterRequired,

    /// A filter kernel with no coefficients.
    #[error("filter kernel must not be empty")]
    EmptyKernel,

    /// A filter hot point outside the kernel extent.
    #[error("hot point ({x}, {y}) outside {width}x{height} kernel")]
    HotPointOutsideKernel {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A pixel buffer whose length disagrees with its declared dimensions.
    #[error("size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An extraction region not contained in the addressable buffer.
    #[error("region {region:?} is not contained in a {width}x{height} buffer")]
    RegionOutOfBounds {
        region: Region,
        width: usize,
        height: usize,
    },

    /// A failure reported by the external resampling engine.
    #[error("resampling engine failed: {0}")]
    Engine(anyhow::Error),
}

impl ResampleError {
    /// Wrap an engine-side failure.
    pub fn engine(err: impl Into<anyhow::Error>) -> Self {
        Self::Engine(err.into())
    }
}
