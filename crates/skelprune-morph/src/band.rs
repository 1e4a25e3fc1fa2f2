//! Boundary band construction
//!
//! The band is the contour mask dilated by a k x k square. Skeleton
//! branches that reach into it are candidates for edge-artifact removal.

use crate::binary::dilate_brick;
use crate::{MorphError, MorphResult};
use skelprune_core::BinaryMask;
use tracing::warn;

/// Default side of the band's square structuring element
pub const DEFAULT_BAND_KERNEL_SIZE: u32 = 9;

/// How to treat an even kernel size
///
/// An even square has no center pixel. The window of pixel (x, y) then
/// spans `x - k/2 ..= x + k/2 - 1`, one pixel more up/left than
/// down/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvenKernelPolicy {
    /// Use the even size as given, with the asymmetric window
    #[default]
    Accept,
    /// Use the next odd size (k + 1)
    RoundUp,
    /// Fail with [`MorphError::InvalidParameters`]
    Reject,
}

impl EvenKernelPolicy {
    /// Resolve the kernel size actually used for `kernel_size`.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidParameters`] for a zero size, or for
    /// an even size under [`EvenKernelPolicy::Reject`].
    pub fn resolve(self, kernel_size: u32) -> MorphResult<u32> {
        if kernel_size == 0 {
            return Err(MorphError::InvalidParameters(
                "band kernel size must be at least 1".to_string(),
            ));
        }
        if kernel_size % 2 == 1 {
            return Ok(kernel_size);
        }
        match self {
            EvenKernelPolicy::Accept => {
                warn!(kernel_size, "even band kernel, window is off-center");
                Ok(kernel_size)
            }
            EvenKernelPolicy::RoundUp => Ok(kernel_size + 1),
            EvenKernelPolicy::Reject => Err(MorphError::InvalidParameters(format!(
                "band kernel size must be odd, got {}",
                kernel_size
            ))),
        }
    }
}

/// Dilate a contour mask into a boundary tolerance band.
///
/// An output pixel is foreground iff any contour pixel lies in the k x k
/// window around it (k resolved through `policy`).
///
/// # Errors
///
/// See [`EvenKernelPolicy::resolve`].
pub fn boundary_band(
    contour: &BinaryMask,
    kernel_size: u32,
    policy: EvenKernelPolicy,
) -> MorphResult<BinaryMask> {
    let k = policy.resolve(kernel_size)?;
    dilate_brick(contour, k, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(w: u32, h: u32, x: u32, y: u32) -> BinaryMask {
        let mut mask = BinaryMask::new(w, h).unwrap();
        mask.set_pixel_unchecked(x, y, 1);
        mask
    }

    #[test]
    fn test_band_square_around_dot() {
        let band = boundary_band(&dot(15, 15, 7, 7), 9, EvenKernelPolicy::Accept).unwrap();
        assert_eq!(band.count_foreground(), 81);
        assert_eq!(band.get_pixel(3, 3), Some(1));
        assert_eq!(band.get_pixel(11, 11), Some(1));
        assert_eq!(band.get_pixel(2, 7), Some(0));
    }

    #[test]
    fn test_band_kernel_one_is_identity() {
        let contour = dot(5, 5, 1, 3);
        let band = boundary_band(&contour, 1, EvenKernelPolicy::Reject).unwrap();
        assert_eq!(band, contour);
    }

    #[test]
    fn test_band_clipped_at_edge() {
        let band = boundary_band(&dot(6, 6, 0, 0), 3, EvenKernelPolicy::Accept).unwrap();
        assert_eq!(band.count_foreground(), 4);
    }

    #[test]
    fn test_even_kernel_policies() {
        assert_eq!(EvenKernelPolicy::Accept.resolve(4).unwrap(), 4);
        assert_eq!(EvenKernelPolicy::RoundUp.resolve(4).unwrap(), 5);
        assert_eq!(EvenKernelPolicy::RoundUp.resolve(7).unwrap(), 7);
        assert!(matches!(
            EvenKernelPolicy::Reject.resolve(4),
            Err(MorphError::InvalidParameters(_))
        ));
        assert!(EvenKernelPolicy::Accept.resolve(0).is_err());
    }

    #[test]
    fn test_even_kernel_accept_is_asymmetric() {
        let band = boundary_band(&dot(9, 9, 4, 4), 2, EvenKernelPolicy::Accept).unwrap();
        // Window of p reaches one pixel up/left, so the dot spreads
        // down/right.
        assert_eq!(band.count_foreground(), 4);
        assert_eq!(band.get_pixel(5, 5), Some(1));
        assert_eq!(band.get_pixel(3, 3), Some(0));
    }
}
