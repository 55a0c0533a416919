// SPDX-License-Identifier: MIT
//! Spatial filter descriptor.
//!
//! A filter is a small 2D kernel of real coefficients applied by the engine
//! after the spectral zoom. The geometry layer only needs its extent and hot
//! point to size the margin around each planned input region; the
//! coefficients themselves pass straight through to the engine.

use crate::error::ResampleError;
use crate::types::{Padding, PixelBlock};

/// How the engine synthesizes border samples that fall outside the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingMode {
    /// Reflect real samples across the image edge.
    #[default]
    Mirror,
    /// Fill with zeros.
    Zero,
}

/// An optional spatial filter kernel and its alignment metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    kernel: PixelBlock,
    hot_point: (usize, usize),
    padding_mode: PaddingMode,
}

impl FilterSpec {
    /// Build a filter from a kernel block.
    ///
    /// `hot_point` anchors the kernel for alignment with the zoom; `None`
    /// means centered. `normalize` divides the coefficients by their sum at
    /// construction time.
    pub fn new(
        kernel: PixelBlock,
        hot_point: Option<(usize, usize)>,
        padding_mode: PaddingMode,
        normalize: bool,
    ) -> Result<Self, ResampleError> {
        if kernel.is_empty() {
            return Err(ResampleError::EmptyKernel);
        }
        let hot_point = hot_point.unwrap_or(((kernel.width() - 1) / 2, (kernel.height() - 1) / 2));
        if hot_point.0 >= kernel.width() || hot_point.1 >= kernel.height() {
            return Err(ResampleError::HotPointOutsideKernel {
                x: hot_point.0,
                y: hot_point.1,
                width: kernel.width(),
                height: kernel.height(),
            });
        }
        let kernel = if normalize { normalized(kernel) } else { kernel };
        Ok(Self {
            kernel,
            hot_point,
            padding_mode,
        })
    }

    pub fn kernel(&self) -> &PixelBlock {
        &self.kernel
    }

    pub fn hot_point(&self) -> (usize, usize) {
        self.hot_point
    }

    pub fn padding_mode(&self) -> PaddingMode {
        self.padding_mode
    }

    /// Margin of spatial context the kernel needs around a region: the
    /// kernel's half-extents split at the hot point.
    pub fn margin(&self) -> Padding {
        let (hx, hy) = self.hot_point;
        Padding::new(
            hy,
            self.kernel.height() - 1 - hy,
            hx,
            self.kernel.width() - 1 - hx,
        )
    }
}

fn normalized(kernel: PixelBlock) -> PixelBlock {
    let sum: f64 = kernel.data().iter().sum();
    if sum == 0.0 {
        return kernel;
    }
    let (w, h) = (kernel.width(), kernel.height());
    let data = kernel.into_vec().into_iter().map(|c| c / sum).collect();
    PixelBlock::from_vec(w, h, data).expect("normalization preserves dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel_3x3() -> PixelBlock {
        PixelBlock::from_vec(3, 3, vec![1.0; 9]).unwrap()
    }

    #[test]
    fn default_hot_point_is_centered() {
        let f = FilterSpec::new(kernel_3x3(), None, PaddingMode::Mirror, false).unwrap();
        assert_eq!(f.hot_point(), (1, 1));
        assert_eq!(f.margin(), Padding::new(1, 1, 1, 1));
    }

    #[test]
    fn margin_splits_at_hot_point() {
        let f = FilterSpec::new(
            PixelBlock::zeroed(5, 3),
            Some((0, 2)),
            PaddingMode::Zero,
            false,
        )
        .unwrap();
        assert_eq!(f.margin(), Padding::new(2, 0, 0, 4));
    }

    #[test]
    fn hot_point_must_lie_in_kernel() {
        assert!(matches!(
            FilterSpec::new(kernel_3x3(), Some((3, 0)), PaddingMode::Mirror, false),
            Err(ResampleError::HotPointOutsideKernel { .. })
        ));
    }

    #[test]
    fn empty_kernel_rejected() {
        assert!(matches!(
            FilterSpec::new(PixelBlock::zeroed(0, 3), None, PaddingMode::Mirror, false),
            Err(ResampleError::EmptyKernel)
        ));
    }

    #[test]
    fn normalization_divides_by_coefficient_sum() {
        let f = FilterSpec::new(kernel_3x3(), None, PaddingMode::Mirror, true).unwrap();
        let expected = 1.0 / 9.0;
        for &c in f.kernel().data() {
            assert!((c - expected).abs() < 1e-12);
        }
    }
}
