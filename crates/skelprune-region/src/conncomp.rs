//! Connected component analysis
//!
//! This module provides functions for finding and labeling connected components
//! in binary masks. It uses a Union-Find (disjoint set) forest over
//! provisional labels, so labeling is two raster scans plus near-constant
//! work per union.

use crate::error::{RegionError, RegionResult};
use skelprune_core::{BinaryMask, Box, LabelImage};
use tracing::debug;

/// Largest label the labeler will hand out
pub const MAX_LABEL: u32 = u32::MAX - 1;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Offsets of the neighbors already visited by a raster scan.
    fn prior_offsets(self) -> &'static [(isize, isize)] {
        match self {
            ConnectivityType::FourWay => &[(-1, 0), (0, -1)],
            ConnectivityType::EightWay => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
        }
    }
}

/// A connected component in a mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Unique label for this component
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: usize,
    /// Bounding box of this component
    pub bounds: Box,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixel_count: usize, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Disjoint-set forest over provisional labels. Index 0 is background.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> usize {
        let label = self.parent.len();
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut x: usize) -> usize {
        // Path halving
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets of `a` and `b`; the smaller root survives.
    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra < rb {
            self.parent[rb] = ra;
        } else if rb < ra {
            self.parent[ra] = rb;
        }
    }

    /// Map every provisional label to its final label.
    ///
    /// Roots are numbered `1..=n` in increasing provisional order, which is
    /// raster order of each component's first pixel.
    fn resolve(&mut self, max_label: u32) -> RegionResult<(Vec<u32>, u32)> {
        let mut resolved = vec![0u32; self.parent.len()];
        let mut count = 0u32;
        for label in 1..self.parent.len() {
            let root = self.find(label);
            if root == label {
                if count >= max_label {
                    return Err(RegionError::LabelOverflow { max: max_label });
                }
                count += 1;
                resolved[label] = count;
            } else {
                // root < label, already numbered
                resolved[label] = resolved[root];
            }
        }
        Ok((resolved, count))
    }
}

/// Label all connected components in a binary mask
///
/// Returns a label image where each foreground pixel holds the label of its
/// component and background holds 0. Labels are `1..=n`, numbered in raster
/// order of each component's first pixel.
///
/// # Errors
///
/// Returns [`RegionError::LabelOverflow`] if the mask has more than
/// [`MAX_LABEL`] components.
///
/// # Examples
///
/// ```
/// use skelprune_core::BinaryMask;
/// use skelprune_region::{ConnectivityType, label_connected_components};
///
/// // Two pixels touching only at a corner
/// let mask = BinaryMask::from_vec(2, 2, vec![1, 0, 0, 1]).unwrap();
///
/// let four = label_connected_components(&mask, ConnectivityType::FourWay).unwrap();
/// assert_eq!(four.max_label(), 2);
///
/// let eight = label_connected_components(&mask, ConnectivityType::EightWay).unwrap();
/// assert_eq!(eight.max_label(), 1);
/// ```
pub fn label_connected_components(
    mask: &BinaryMask,
    connectivity: ConnectivityType,
) -> RegionResult<LabelImage> {
    label_with_limit(mask, connectivity, MAX_LABEL)
}

fn label_with_limit(
    mask: &BinaryMask,
    connectivity: ConnectivityType,
    max_label: u32,
) -> RegionResult<LabelImage> {
    let (w, h) = mask.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    let src = mask.data();
    let prior = connectivity.prior_offsets();

    let mut forest = UnionFind::new();
    let mut provisional = vec![0usize; wu * hu];

    // Pass 1: provisional labels, recording equivalences
    for y in 0..hu {
        for x in 0..wu {
            let idx = y * wu + x;
            if src[idx] == 0 {
                continue;
            }
            let mut current = 0;
            for &(dx, dy) in prior {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= wu as isize {
                    continue;
                }
                let neighbor = provisional[ny as usize * wu + nx as usize];
                if neighbor == 0 {
                    continue;
                }
                if current == 0 {
                    current = neighbor;
                } else {
                    forest.union(current, neighbor);
                }
            }
            if current == 0 {
                current = forest.make_set();
            }
            provisional[idx] = current;
        }
    }

    // Pass 2: replace provisional labels by final ones
    let (resolved, count) = forest.resolve(max_label)?;
    let data = provisional.into_iter().map(|p| resolved[p]).collect();

    debug!(
        components = count,
        provisional = resolved.len() - 1,
        ?connectivity,
        "labeled connected components"
    );
    Ok(LabelImage::from_vec(w, h, data)?)
}

/// Find all connected components in a binary mask
///
/// Returns a vector of connected components, each with a label, pixel count,
/// and bounding box, ordered by label.
pub fn find_connected_components(
    mask: &BinaryMask,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let labeled = label_connected_components(mask, connectivity)?;
    let n = labeled.max_label() as usize;
    let w = labeled.width() as usize;

    // (count, min_x, min_y, max_x, max_y) per label - 1
    let mut acc = vec![(0usize, i32::MAX, i32::MAX, i32::MIN, i32::MIN); n];
    for (idx, &label) in labeled.data().iter().enumerate() {
        if label == 0 {
            continue;
        }
        let (x, y) = ((idx % w) as i32, (idx / w) as i32);
        let entry = &mut acc[label as usize - 1];
        entry.0 += 1;
        entry.1 = entry.1.min(x);
        entry.2 = entry.2.min(y);
        entry.3 = entry.3.max(x);
        entry.4 = entry.4.max(y);
    }

    Ok(acc
        .into_iter()
        .enumerate()
        .map(|(i, (count, min_x, min_y, max_x, max_y))| {
            ConnectedComponent::new(
                i as u32 + 1,
                count,
                Box::from_extents(min_x, min_y, max_x, max_y),
            )
        })
        .collect())
}

/// Extract a single component from a labeled image as a mask
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for label 0 (background).
pub fn extract_component(labeled: &LabelImage, label: u32) -> RegionResult<BinaryMask> {
    if label == 0 {
        return Err(RegionError::InvalidParameters(
            "label 0 is background, not a component".to_string(),
        ));
    }
    Ok(labeled.mask_of(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(w: u32, h: u32, rows: &[&str]) -> BinaryMask {
        let data = rows
            .iter()
            .flat_map(|r| r.bytes().map(|b| (b == b'x') as u8))
            .collect();
        BinaryMask::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn test_empty_mask_has_no_labels() {
        let labeled =
            label_connected_components(&BinaryMask::new(4, 3).unwrap(), ConnectivityType::EightWay)
                .unwrap();
        assert_eq!(labeled.max_label(), 0);
    }

    #[test]
    fn test_u_shape_merges() {
        // The two arms get different provisional labels and meet at the bottom
        let m = mask(5, 3, &["x...x", "x...x", "xxxxx"]);
        let labeled = label_connected_components(&m, ConnectivityType::FourWay).unwrap();
        assert_eq!(labeled.max_label(), 1);
        assert!(labeled.data().iter().all(|&l| l <= 1));
        assert_eq!(labeled.to_mask(), m);
    }

    #[test]
    fn test_labels_in_raster_order() {
        let m = mask(5, 3, &["..x..", "x....", "...xx"]);
        let labeled = label_connected_components(&m, ConnectivityType::EightWay).unwrap();
        assert_eq!(labeled.get_label(2, 0), Some(1));
        assert_eq!(labeled.get_label(0, 1), Some(2));
        assert_eq!(labeled.get_label(3, 2), Some(3));
        assert_eq!(labeled.get_label(4, 2), Some(3));
    }

    #[test]
    fn test_anti_diagonal_chain() {
        // Each pixel touches the previous one only through the NE neighbor
        let m = mask(4, 4, &["...x", "..x.", ".x..", "x..."]);
        let eight = label_connected_components(&m, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight.max_label(), 1);
        let four = label_connected_components(&m, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.max_label(), 4);
    }

    #[test]
    fn test_label_overflow() {
        let m = mask(3, 1, &["x.x"]);
        assert!(matches!(
            label_with_limit(&m, ConnectivityType::EightWay, 1),
            Err(RegionError::LabelOverflow { max: 1 })
        ));
        assert!(label_with_limit(&m, ConnectivityType::EightWay, 2).is_ok());
    }

    #[test]
    fn test_find_components_stats() {
        let m = mask(6, 4, &["xx....", "xx....", "....x.", "...xxx"]);
        let comps = find_connected_components(&m, ConnectivityType::EightWay).unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].pixel_count, 4);
        assert_eq!(comps[0].bounds, Box::new_unchecked(0, 0, 2, 2));
        assert_eq!(comps[1].label, 2);
        assert_eq!(comps[1].pixel_count, 4);
        assert_eq!(comps[1].bounds, Box::new_unchecked(3, 2, 3, 2));
    }

    #[test]
    fn test_extract_component() {
        let m = mask(3, 1, &["x.x"]);
        let labeled = label_connected_components(&m, ConnectivityType::EightWay).unwrap();
        let second = extract_component(&labeled, 2).unwrap();
        assert_eq!(second.data(), &[0, 0, 1]);
        assert!(extract_component(&labeled, 0).is_err());
        assert!(extract_component(&labeled, 7).unwrap().is_empty());
    }
}
