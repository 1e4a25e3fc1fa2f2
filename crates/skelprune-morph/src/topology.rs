//! Local topology of skeleton pixels
//!
//! Every skeleton pixel is classified by the number of skeleton pixels in
//! its 8-neighborhood:
//!
//! | neighbors | role     |
//! |-----------|----------|
//! | 0         | isolated (no class) |
//! | 1         | endpoint (also bridge) |
//! | 2         | bridge   |
//! | 3..=8     | junction |
//!
//! The count is a 3x3 correlation with weight 1 on the ring and 0 at the
//! center, zero-padded at the image edge, then forced to 0 on background
//! pixels. No graph is built; the whole classification is one pass.

use crate::sel::Sel;
use skelprune_core::BinaryMask;

/// Per-pixel count of 8-connected foreground neighbors
///
/// Values lie in `0..=8`. Background pixels always hold 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCountMap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl NeighborCountMap {
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

    /// Get raw access to the counts (row-major).
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the count at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Mask of the pixels whose count satisfies `pred`.
    pub fn mask_where(&self, pred: impl Fn(u8) -> bool) -> BinaryMask {
        let mut out = match BinaryMask::new(self.width, self.height) {
            Ok(mask) => mask,
            // The count map was built from a valid mask.
            Err(_) => unreachable!("count map dimensions are positive"),
        };
        for (dst, &c) in out.data_mut().iter_mut().zip(&self.data) {
            *dst = pred(c) as u8;
        }
        out
    }

    /// Derive the junction / bridge / endpoint masks.
    pub fn classify(&self) -> TopologyMasks {
        TopologyMasks {
            junction: self.mask_where(|c| c > 2),
            bridge: self.mask_where(|c| c == 1 || c == 2),
            endpoint: self.mask_where(|c| c == 1),
        }
    }
}

/// Skeleton pixels split by topological role
///
/// `endpoint` is a subset of `bridge`; `junction` and `bridge` are
/// disjoint. Isolated skeleton pixels appear in none of the masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyMasks {
    /// Pixels with three or more skeleton neighbors (branch points)
    pub junction: BinaryMask,
    /// Pixels with one or two skeleton neighbors (arc pixels and tips)
    pub bridge: BinaryMask,
    /// Pixels with exactly one skeleton neighbor (tips)
    pub endpoint: BinaryMask,
}

/// Count the 8-connected foreground neighbors of every foreground pixel.
pub fn count_neighbors(skeleton: &BinaryMask) -> NeighborCountMap {
    let (w, h) = skeleton.dimensions();
    let ring: Vec<(i32, i32)> = Sel::create_ring8().hit_offsets().collect();
    let mut data = vec![0u8; (w as usize) * (h as usize)];

    for (x, y) in skeleton.foreground_pixels() {
        let (xi, yi) = (x as i32, y as i32);
        let count = ring
            .iter()
            .filter(|&&(dx, dy)| skeleton.get_pixel_or_background(xi + dx, yi + dy) != 0)
            .count();
        data[(y as usize) * (w as usize) + (x as usize)] = count as u8;
    }

    NeighborCountMap {
        width: w,
        height: h,
        data,
    }
}

/// Classify every skeleton pixel as junction, bridge, or endpoint.
///
/// # Examples
///
/// ```
/// use skelprune_core::BinaryMask;
/// use skelprune_morph::classify_topology;
///
/// // A horizontal 3-pixel segment: two tips and one arc pixel.
/// let skeleton = BinaryMask::from_vec(5, 1, vec![0, 1, 1, 1, 0]).unwrap();
/// let topo = classify_topology(&skeleton);
/// assert_eq!(topo.endpoint.count_foreground(), 2);
/// assert_eq!(topo.bridge.count_foreground(), 3);
/// assert!(topo.junction.is_empty());
/// ```
pub fn classify_topology(skeleton: &BinaryMask) -> TopologyMasks {
    count_neighbors(skeleton).classify()
}
