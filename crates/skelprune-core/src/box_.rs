//! Box - Rectangle regions
//!
//! Axis-aligned rectangles used for component bounds and search windows.

/// A rectangle region
///
/// A small `Copy` type; `(x, y)` is the top-left corner and `w`/`h` are
/// the extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create the smallest box covering the inclusive pixel extents
    /// `min_x..=max_x`, `min_y..=max_y`.
    pub fn from_extents(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check whether the point lies inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Grow the box by `margin` pixels on every side and clip it to a
    /// `width` x `height` image.
    ///
    /// Returns `None` if nothing of the grown box lies inside the image.
    /// Margins too large for `i32` arithmetic saturate.
    pub fn expand_clipped(&self, margin: i32, width: u32, height: u32) -> Option<Box> {
        let x0 = self.x.saturating_sub(margin).max(0);
        let y0 = self.y.saturating_sub(margin).max(0);
        let x1 = self.right().saturating_add(margin).min(width as i32);
        let y1 = self.bottom().saturating_add(margin).min(height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Box::new_unchecked(x0, y0, x1 - x0, y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extents() {
        let b = Box::from_extents(2, 3, 4, 3);
        assert_eq!(b, Box::new_unchecked(2, 3, 3, 1));
        assert!(b.contains_point(4, 3));
        assert!(!b.contains_point(5, 3));
    }

    #[test]
    fn test_expand_clipped() {
        let b = Box::new_unchecked(1, 1, 2, 2);
        assert_eq!(
            b.expand_clipped(3, 10, 4),
            Some(Box::new_unchecked(0, 0, 6, 4))
        );
        let outside = Box::new_unchecked(20, 20, 1, 1);
        assert_eq!(outside.expand_clipped(1, 10, 10), None);
        // Huge margins cover the whole image
        let dot = Box::new_unchecked(4, 4, 1, 1);
        assert_eq!(
            dot.expand_clipped(i32::MAX, 10, 8),
            Some(Box::new_unchecked(0, 0, 10, 8))
        );
    }
}
