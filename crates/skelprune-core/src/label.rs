//! LabelImage - Connected component label grid
//!
//! A `u32` grid with the dimensions of the mask it was derived from.
//! Label 0 is background; every positive label identifies one connected
//! component.

use crate::error::{Error, Result, check_same_size};
use crate::mask::BinaryMask;

/// Label image produced by connected component labeling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl LabelImage {
    /// Create an all-background label image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(LabelImage {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Create a label image from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(LabelImage {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Fail with [`Error::DimensionMismatch`] unless `mask` has the same
    /// dimensions.
    pub fn check_same_size(&self, mask: &BinaryMask) -> Result<()> {
        check_same_size(self.dimensions(), mask.dimensions())
    }

    /// Get raw access to the labels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable access to the labels.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get the label at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_label(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Largest label present (0 for an all-background image).
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Foreground mask of all pixels with a non-zero label.
    pub fn to_mask(&self) -> BinaryMask {
        self.mask_where(|label| label != 0)
    }

    /// Mask of the pixels carrying `label`.
    pub fn mask_of(&self, label: u32) -> BinaryMask {
        self.mask_where(|l| l == label && label != 0)
    }

    /// Mask of the pixels whose label satisfies `pred`.
    pub fn mask_where(&self, pred: impl Fn(u32) -> bool) -> BinaryMask {
        let bits = self.data.iter().map(|&l| pred(l) as u8).collect();
        BinaryMask::from_bits(self.width, self.height, bits)
    }
}
