//! Pixel labeling functions
//!
//! Statistics over label images: per-label sizes and component counts.

use crate::conncomp::{ConnectivityType, label_connected_components};
use crate::error::RegionResult;
use skelprune_core::{BinaryMask, LabelImage};
use std::collections::BTreeMap;

/// Count the pixels of every label present in a label image
///
/// Background (label 0) is not counted. Works on any label image, including
/// ones with gaps in the label range.
///
/// # Returns
///
/// A map from label to pixel count, ordered by label.
pub fn get_component_sizes(labeled: &LabelImage) -> BTreeMap<u32, usize> {
    let mut sizes = BTreeMap::new();
    for &label in labeled.data() {
        if label > 0 {
            *sizes.entry(label).or_insert(0) += 1;
        }
    }
    sizes
}

/// Count the number of connected components
///
/// # Arguments
///
/// * `mask` - Input binary mask
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// The number of foreground connected components.
pub fn count_components(mask: &BinaryMask, connectivity: ConnectivityType) -> RegionResult<u32> {
    let labeled = label_connected_components(mask, connectivity)?;
    Ok(labeled.max_label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_with_gaps() {
        let labeled = LabelImage::from_vec(3, 2, vec![0, 5, 5, 2, 0, 5]).unwrap();
        let sizes = get_component_sizes(&labeled);
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[&2], 1);
        assert_eq!(sizes[&5], 3);
        assert!(!sizes.contains_key(&0));
    }

    #[test]
    fn test_count_components() {
        let mask = BinaryMask::from_vec(5, 1, vec![1, 0, 1, 1, 0]).unwrap();
        assert_eq!(count_components(&mask, ConnectivityType::EightWay).unwrap(), 2);
        let empty = BinaryMask::new(5, 1).unwrap();
        assert_eq!(count_components(&empty, ConnectivityType::FourWay).unwrap(), 0);
    }
}
