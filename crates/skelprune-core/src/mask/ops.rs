//! Pixel-wise logical operations on masks
//!
//! All binary operations require both operands to have the same
//! dimensions and return a new mask.

use super::BinaryMask;
use crate::error::Result;

impl BinaryMask {
    /// Pixel-wise AND.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if the sizes differ.
    pub fn and(&self, other: &BinaryMask) -> Result<BinaryMask> {
        self.combine(other, |a, b| a & b)
    }

    /// Pixel-wise OR.
    pub fn or(&self, other: &BinaryMask) -> Result<BinaryMask> {
        self.combine(other, |a, b| a | b)
    }

    /// Pixel-wise XOR.
    pub fn xor(&self, other: &BinaryMask) -> Result<BinaryMask> {
        self.combine(other, |a, b| a ^ b)
    }

    /// Set difference: pixels of `self` that are not in `other`.
    pub fn subtract(&self, other: &BinaryMask) -> Result<BinaryMask> {
        self.combine(other, |a, b| a & (b ^ 1))
    }

    /// Pixel-wise complement.
    pub fn invert(&self) -> BinaryMask {
        let mut out = self.clone();
        for v in out.data_mut() {
            *v ^= 1;
        }
        out
    }

    /// Check whether every foreground pixel of `self` is also foreground
    /// in `other`.
    pub fn is_subset_of(&self, other: &BinaryMask) -> Result<bool> {
        self.check_same_size(other)?;
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .all(|(&a, &b)| a == 0 || b != 0))
    }

    /// Count pixels that are foreground in both masks.
    pub fn count_intersection(&self, other: &BinaryMask) -> Result<usize> {
        self.check_same_size(other)?;
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|&(&a, &b)| a != 0 && b != 0)
            .count())
    }

    fn combine(&self, other: &BinaryMask, op: impl Fn(u8, u8) -> u8) -> Result<BinaryMask> {
        self.check_same_size(other)?;
        let mut out = self.create_template();
        for ((dst, &a), &b) in out.data_mut().iter_mut().zip(self.data()).zip(other.data()) {
            *dst = op(a, b);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn mask(data: &[u8]) -> BinaryMask {
        BinaryMask::from_vec(data.len() as u32, 1, data.to_vec()).unwrap()
    }

    #[test]
    fn test_logic_ops() {
        let a = mask(&[1, 1, 0, 0]);
        let b = mask(&[1, 0, 1, 0]);
        assert_eq!(a.and(&b).unwrap().data(), &[1, 0, 0, 0]);
        assert_eq!(a.or(&b).unwrap().data(), &[1, 1, 1, 0]);
        assert_eq!(a.xor(&b).unwrap().data(), &[0, 1, 1, 0]);
        assert_eq!(a.subtract(&b).unwrap().data(), &[0, 1, 0, 0]);
        assert_eq!(a.invert().data(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_subset_and_intersection() {
        let a = mask(&[1, 0, 0, 0]);
        let b = mask(&[1, 0, 1, 0]);
        assert!(a.is_subset_of(&b).unwrap());
        assert!(!b.is_subset_of(&a).unwrap());
        assert_eq!(a.count_intersection(&b).unwrap(), 1);
    }

    #[test]
    fn test_size_mismatch() {
        let a = mask(&[1, 0]);
        let b = mask(&[1, 0, 1]);
        assert!(matches!(a.and(&b), Err(Error::DimensionMismatch { .. })));
    }
}
