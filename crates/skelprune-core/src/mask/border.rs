//! Border operations for masks
//!
//! Skeletonizers tend to leave artifacts on the outermost pixel ring of
//! the image. These functions clear that ring.

use super::BinaryMask;
use crate::error::{Error, Result};

impl BinaryMask {
    /// Clear the outermost 1-pixel ring (top row, bottom row, leftmost
    /// and rightmost column) in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the mask has fewer than 2
    /// rows or 2 columns. The mask is not modified in that case.
    pub fn zero_border(&mut self) -> Result<()> {
        let (w, h) = self.dimensions();
        if w < 2 || h < 2 {
            return Err(Error::InvalidParameter(format!(
                "border clearing requires at least 2x2 pixels, got {}x{}",
                w, h
            )));
        }

        let w = w as usize;
        let h = h as usize;
        let data = self.data_mut();
        data[..w].fill(0);
        data[(h - 1) * w..].fill(0);
        for y in 1..h - 1 {
            data[y * w] = 0;
            data[y * w + w - 1] = 0;
        }
        Ok(())
    }

    /// Check whether every pixel of the outermost ring is background.
    pub fn border_is_clear(&self) -> bool {
        let (w, h) = self.dimensions();
        let top_bottom = (0..w).all(|x| {
            self.get_pixel_unchecked(x, 0) == 0 && self.get_pixel_unchecked(x, h - 1) == 0
        });
        let sides = (0..h).all(|y| {
            self.get_pixel_unchecked(0, y) == 0 && self.get_pixel_unchecked(w - 1, y) == 0
        });
        top_bottom && sides
    }
}

/// Clear the outermost pixel ring of `mask` and return it.
///
/// By-value form of [`BinaryMask::zero_border`].
pub fn zero_border(mut mask: BinaryMask) -> Result<BinaryMask> {
    mask.zero_border()?;
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(w: u32, h: u32) -> BinaryMask {
        let mut mask = BinaryMask::new(w, h).unwrap();
        mask.set_all(1);
        mask
    }

    #[test]
    fn test_zero_border_clears_ring_only() {
        let mask = zero_border(full(5, 4)).unwrap();
        assert!(mask.border_is_clear());
        for y in 1..3 {
            for x in 1..4 {
                assert_eq!(mask.get_pixel(x, y), Some(1), "interior ({x},{y})");
            }
        }
        assert_eq!(mask.count_foreground(), 3 * 2);
    }

    #[test]
    fn test_zero_border_2x2_clears_everything() {
        let mask = zero_border(full(2, 2)).unwrap();
        assert!(mask.is_empty());
    }

    #[test]
    fn test_zero_border_too_small() {
        let mut mask = full(1, 5);
        assert!(matches!(
            mask.zero_border(),
            Err(Error::InvalidParameter(_))
        ));
        // Untouched on error
        assert_eq!(mask.count_foreground(), 5);
    }
}
