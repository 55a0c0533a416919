// SPDX-License-Identifier: MIT
//! Core value types: zoom ratio, padding, regions, and pixel blocks.
//!
//! All four are plain immutable values. `ZoomRatio` and the run
//! configuration are built once and shared read-only across workers;
//! `Region`, `Padding`, and `PixelBlock` instances are created per output
//! tile, consumed by the engine call, and discarded once the result is
//! written back.

use crate::error::ResampleError;

/// Rational scale factor applied per axis, `input:output` samples.
///
/// Reduced to lowest terms at construction. `ratio() > 1` means upsampling,
/// `< 1` downsampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoomRatio {
    input: u32,
    output: u32,
}

impl ZoomRatio {
    /// Build a ratio from two positive integers, reducing by their gcd.
    pub fn new(input: u32, output: u32) -> Result<Self, ResampleError> {
        if input == 0 || output == 0 {
            return Err(ResampleError::InvalidZoomRatio { input, output });
        }
        let g = gcd(input, output);
        Ok(Self {
            input: input / g,
            output: output / g,
        })
    }

    /// Parse `"I"` (shorthand for `I:1`) or `"I:O"`.
    pub fn parse(text: &str) -> Result<Self, ResampleError> {
        let malformed = || ResampleError::MalformedZoomRatio(text.to_string());
        let (input, output) = match text.split_once(':') {
            Some((i, o)) => (
                i.trim().parse::<u32>().map_err(|_| malformed())?,
                o.trim().parse::<u32>().map_err(|_| malformed())?,
            ),
            None => (text.trim().parse::<u32>().map_err(|_| malformed())?, 1),
        };
        Self::new(input, output)
    }

    pub fn input(&self) -> u32 {
        self.input
    }

    pub fn output(&self) -> u32 {
        self.output
    }

    /// `input / output` as a float, used to pick up- vs downsampling paths.
    pub fn ratio(&self) -> f64 {
        f64::from(self.input) / f64::from(self.output)
    }

    pub fn is_identity(&self) -> bool {
        self.input == self.output
    }

    pub fn is_upsampling(&self) -> bool {
        self.input > self.output
    }

    /// Output-plane length for an input-plane length: `ceil(len * i / o)`.
    pub fn scale_len(&self, len: usize) -> usize {
        let scaled = (len as u64) * u64::from(self.input);
        scaled.div_ceil(u64::from(self.output)) as usize
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Per-side margin amounts in input-grid pixels.
///
/// Created fresh per tile by the padding calculator and handed to the
/// engine, which synthesizes that many border rows/columns instead of
/// reading real pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }

    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// A rectangle over the input or output pixel grid.
///
/// The origin is signed because planned ideal regions may extend past the
/// top/left image edge; sizes are unsigned and may be zero (empty region).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The full extent of a `width` x `height` image, at origin (0, 0).
    pub fn of_extent(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// One past the right edge.
    pub fn end_x(&self) -> i64 {
        self.x + self.width as i64
    }

    /// One past the bottom edge.
    pub fn end_y(&self) -> i64 {
        self.y + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Intersection with `other`; empty when they do not overlap, anchored
    /// at the clamped origin.
    pub fn intersect(&self, other: &Region) -> Region {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.end_x().min(other.end_x());
        let y1 = self.end_y().min(other.end_y());
        Region::new(
            x0,
            y0,
            (x1 - x0).max(0) as usize,
            (y1 - y0).max(0) as usize,
        )
    }

    /// Expand by a margin on each side.
    pub fn grow(&self, margin: &Padding) -> Region {
        Region::new(
            self.x - margin.left as i64,
            self.y - margin.top as i64,
            self.width + margin.horizontal(),
            self.height + margin.vertical(),
        )
    }

    pub fn contains(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.end_x() <= self.end_x()
            && other.end_y() <= self.end_y()
    }
}

/// Dense, row-major buffer of real-valued samples.
///
/// The unit exchanged with the engine and the block extractor. The input
/// image and the assembled output are also `PixelBlock`s.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBlock {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl PixelBlock {
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self, ResampleError> {
        let expected = width
            .checked_mul(height)
            .ok_or(ResampleError::SizeMismatch {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(ResampleError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn row(&self, y: usize) -> &[f64] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [f64] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }
}
