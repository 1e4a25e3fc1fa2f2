//! Conversion between 8-bit caller encodings and 0/1 masks
//!
//! External producers hand over masks as 8-bit buffers ({0,255} from the
//! skeletonizer and the region loader). The pipeline core only accepts
//! {0,1}; these helpers sit at that boundary.

use super::BinaryMask;
use crate::error::{Error, Result};

impl BinaryMask {
    /// Create a mask where every non-zero input value is foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `values.len() != width * height`.
    pub fn from_nonzero(width: u32, height: u32, values: &[u8]) -> Result<Self> {
        Self::from_threshold(width, height, values, 0)
    }

    /// Create a mask where every input value strictly greater than
    /// `threshold` is foreground.
    ///
    /// # Errors
    ///
    /// Same as [`BinaryMask::from_nonzero`].
    pub fn from_threshold(width: u32, height: u32, values: &[u8], threshold: u8) -> Result<Self> {
        let mut mask = BinaryMask::new(width, height)?;
        if values.len() != mask.data().len() {
            return Err(Error::BufferLength {
                expected: mask.data().len(),
                actual: values.len(),
            });
        }
        for (dst, &v) in mask.data_mut().iter_mut().zip(values) {
            *dst = (v > threshold) as u8;
        }
        Ok(mask)
    }

    /// Convert to an 8-bit buffer with foreground written as `value`
    /// (typically 255) and background as 0.
    pub fn to_scaled(&self, value: u8) -> Vec<u8> {
        self.data().iter().map(|&v| v * value).collect()
    }
}
