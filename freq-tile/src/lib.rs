// SPDX-License-Identifier: MIT
//! # freq-tile: Tile Geometry for Frequency-Domain Resampling
//!
//! This crate implements the tile/region geometry and padding-management
//! layer of a frequency-domain image resampler. Given an output tile, an
//! image-wide rational zoom ratio, and an optional spatial filter kernel, it
//! determines exactly which input pixels must be read (including margins for
//! filter support and mirror/zero padding at image borders), extracts them
//! into a dense block, hands the block to a resampling engine, and writes
//! the result back into the correct output tile.
//!
//! The spectral mathematics (decomposition, frequency filtering,
//! zero-padding/periodization zoom, inverse transform) live behind the
//! [`engine::FrequencyResampler`] trait. The engine is treated as an opaque,
//! stateless function of a pixel block and a parameter set; a zero-order
//! reference implementation is provided for wiring and tests.
//!
//! ## Key Components
//!
//! - [`types`]: Zoom ratio, region, padding, and pixel block value types
//! - [`plan`]: Region planner, padding calculator, output region resizer,
//!   and tile grid construction
//! - [`extract`]: Dense block extraction from the input buffer
//! - [`engine`]: The engine seam and the zero-order reference engine
//! - [`orchestrator`]: The per-run driver tying the pieces together
//!
//! ## Concurrency
//!
//! Tiles are fully independent: each worker reads the shared input buffer
//! and the immutable [`config::ResampleConfig`], and produces its own output
//! block. [`orchestrator::Resampler::run`] dispatches tiles across a rayon
//! worker pool and merges the results sequentially, so no output locking is
//! needed. Engine reentrancy is demanded by the `Send + Sync` bound on the
//! engine trait.

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod filter;
pub mod orchestrator;
pub mod plan;
pub mod types;

pub use config::{DecompositionPolicy, ResampleConfig, ZoomStrategy};
pub use engine::{FrequencyResampler, ZeroOrderZoom};
pub use error::ResampleError;
pub use extract::extract_block;
pub use filter::{FilterSpec, PaddingMode};
pub use orchestrator::Resampler;
pub use plan::{
    output_extent, plan_input_region, reconcile_output_region, remaining_padding, tile_grid,
};
pub use types::{Padding, PixelBlock, Region, ZoomRatio};
