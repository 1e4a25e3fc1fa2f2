//! BinaryMask - The main mask container
//!
//! `BinaryMask` is the fundamental image type of the pruning pipeline: a
//! width x height grid whose cells are either 0 (background) or 1
//! (foreground).
//!
//! # Pixel layout
//!
//! - One `u8` per pixel, row-major, no padding
//! - The pixel at (x, y) is at index `y * width + x`
//! - Every stored value is 0 or 1; setters clamp non-zero input to 1
//!
//! # Ownership model
//!
//! Masks are plain values. Every pipeline stage borrows its inputs and
//! returns a freshly allocated output; only [`BinaryMask::zero_border`]
//! mutates in place.

mod border;
mod convert;
mod ops;

pub use border::zero_border;

use crate::error::{Error, Result, check_same_size};

/// Binary image with 0/1 cells
///
/// # Examples
///
/// ```
/// use skelprune_core::BinaryMask;
///
/// let mut mask = BinaryMask::new(8, 6).unwrap();
/// mask.set_pixel(3, 2, 1).unwrap();
/// assert_eq!(mask.get_pixel(3, 2), Some(1));
/// assert_eq!(mask.count_foreground(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BinaryMask {
    /// Create a new mask with all pixels set to background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(BinaryMask {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Create a mask from a row-major 0/1 buffer.
    ///
    /// Non-zero values are stored as 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
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
        let mut data = data;
        for v in data.iter_mut() {
            *v = (*v != 0) as u8;
        }
        Ok(BinaryMask {
            width,
            height,
            data,
        })
    }

    /// Wrap a 0/1 buffer whose length is already known to match.
    pub(crate) fn from_bits(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize));
        BinaryMask {
            width,
            height,
            data,
        }
    }

    /// Create a background mask with the same dimensions as `self`.
    pub fn create_template(&self) -> Self {
        BinaryMask {
            width: self.width,
            height: self.height,
            data: vec![0u8; self.data.len()],
        }
    }

    /// Get the mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check if two masks have the same width and height.
    pub fn sizes_equal(&self, other: &BinaryMask) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Fail with [`Error::DimensionMismatch`] unless `other` has the
    /// dimensions of `self`.
    pub fn check_same_size(&self, other: &BinaryMask) -> Result<()> {
        check_same_size(self.dimensions(), other.dimensions())
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the pixel data.
    ///
    /// Callers must only store 0 or 1.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the mask and return its row-major buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get a row slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Get a pixel at signed coordinates, treating everything outside
    /// the mask as background.
    #[inline]
    pub fn get_pixel_or_background(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return 0;
        }
        self.data[self.index(x as u32, y as u32)]
    }

    /// Check whether (x, y) is a foreground pixel.
    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).is_some_and(|v| v != 0)
    }

    /// Set a pixel value at (x, y). Non-zero values are stored as 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = self.index(x, y);
        self.data[idx] = (val != 0) as u8;
    }

    /// Set every pixel to `val` (clamped to 0/1).
    pub fn set_all(&mut self, val: u8) {
        self.data.fill((val != 0) as u8);
    }

    /// Count foreground pixels.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Check whether the mask has no foreground pixel.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Iterate over the coordinates of all foreground pixels in raster
    /// order.
    pub fn foreground_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(move |(idx, _)| ((idx as u32) % width, (idx as u32) / width))
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
