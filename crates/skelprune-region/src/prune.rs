//! Redundant component pruning
//!
//! Skeleton branches that run into the boundary band and stay short are
//! artifacts of boundary noise. A labeled component is redundant when at
//! least one of its pixels lies in the band and its total pixel count (over
//! the whole image, not only inside the band) is below the threshold.

use crate::error::RegionResult;
use crate::label::get_component_sizes;
use skelprune_core::{BinaryMask, LabelImage};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Default pixel-count threshold below which a band-touching component is
/// removed
pub const DEFAULT_REDUNDANT_THRESHOLD: usize = 50;

/// Find the labels of redundant components
///
/// # Arguments
///
/// * `labels` - Labeled bridge components
/// * `band` - Boundary band mask
/// * `threshold` - Components with fewer pixels than this are redundant
///
/// # Returns
///
/// The redundant labels, sorted ascending.
///
/// # Errors
///
/// Returns [`crate::RegionError::Core`] if `labels` and `band` differ in
/// size.
pub fn redundant_labels(
    labels: &LabelImage,
    band: &BinaryMask,
    threshold: usize,
) -> RegionResult<Vec<u32>> {
    labels.check_same_size(band)?;

    let candidates: BTreeSet<u32> = labels
        .data()
        .iter()
        .zip(band.data())
        .filter(|&(&label, &b)| label != 0 && b != 0)
        .map(|(&label, _)| label)
        .collect();
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let sizes = get_component_sizes(labels);
    let redundant: Vec<u32> = candidates
        .iter()
        .copied()
        .filter(|label| {
            let size = sizes.get(label).copied().unwrap_or(0);
            let remove = size < threshold;
            trace!(label, size, threshold, remove, "band candidate");
            remove
        })
        .collect();

    debug!(
        candidates = candidates.len(),
        redundant = redundant.len(),
        threshold,
        "selected redundant components"
    );
    Ok(redundant)
}

/// Clear every pixel of `skeleton` whose label is in `remove`
///
/// `remove` must be sorted ascending, as returned by [`redundant_labels`].
///
/// # Errors
///
/// Returns [`crate::RegionError::Core`] if `skeleton` and `labels` differ in
/// size.
pub fn remove_labels(
    skeleton: &BinaryMask,
    labels: &LabelImage,
    remove: &[u32],
) -> RegionResult<BinaryMask> {
    labels.check_same_size(skeleton)?;
    debug_assert!(remove.windows(2).all(|p| p[0] < p[1]));

    let mut out = skeleton.clone();
    if remove.is_empty() {
        return Ok(out);
    }
    for (dst, &label) in out.data_mut().iter_mut().zip(labels.data()) {
        if label != 0 && remove.binary_search(&label).is_ok() {
            *dst = 0;
        }
    }
    Ok(out)
}

/// Remove short components that touch the boundary band
///
/// A component is removed when any of its pixels is in `band` and its total
/// pixel count is strictly less than `threshold`. All other skeleton pixels
/// are left as they are.
///
/// # Errors
///
/// Returns [`crate::RegionError::Core`] unless all three inputs have the
/// same dimensions.
///
/// # Examples
///
/// ```
/// use skelprune_core::BinaryMask;
/// use skelprune_region::{ConnectivityType, label_connected_components, prune_redundant_components};
///
/// let skeleton = BinaryMask::from_vec(6, 1, vec![1, 1, 0, 1, 1, 1]).unwrap();
/// let labels = label_connected_components(&skeleton, ConnectivityType::EightWay).unwrap();
/// let band = BinaryMask::from_vec(6, 1, vec![1, 0, 0, 0, 0, 1]).unwrap();
///
/// let pruned = prune_redundant_components(&skeleton, &labels, &band, 3).unwrap();
/// assert_eq!(pruned.data(), &[0, 0, 0, 1, 1, 1]);
/// ```
pub fn prune_redundant_components(
    skeleton: &BinaryMask,
    labels: &LabelImage,
    band: &BinaryMask,
    threshold: usize,
) -> RegionResult<BinaryMask> {
    skeleton.check_same_size(band)?;
    let redundant = redundant_labels(labels, band, threshold)?;
    let pruned = remove_labels(skeleton, labels, &redundant)?;
    debug!(
        removed_pixels = skeleton.count_foreground() - pruned.count_foreground(),
        "pruned redundant components"
    );
    Ok(pruned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegionError;
    use crate::conncomp::{ConnectivityType, label_connected_components};
    use skelprune_core::Error;

    fn row(values: &[u8]) -> BinaryMask {
        BinaryMask::from_vec(values.len() as u32, 1, values.to_vec()).unwrap()
    }

    #[test]
    fn test_full_size_not_in_band_size() {
        // Only one pixel of the 4-pixel component is in the band
        let skeleton = row(&[1, 1, 1, 1, 0, 1]);
        let labels = label_connected_components(&skeleton, ConnectivityType::EightWay).unwrap();
        let band = row(&[1, 0, 0, 0, 0, 1]);
        assert_eq!(redundant_labels(&labels, &band, 4).unwrap(), vec![2]);
        assert_eq!(redundant_labels(&labels, &band, 5).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let skeleton = row(&[1, 1, 1]);
        let labels = label_connected_components(&skeleton, ConnectivityType::EightWay).unwrap();
        let band = row(&[0, 1, 0]);
        let kept = prune_redundant_components(&skeleton, &labels, &band, 3).unwrap();
        assert_eq!(kept, skeleton);
        let removed = prune_redundant_components(&skeleton, &labels, &band, 4).unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_components_outside_band_untouched() {
        let skeleton = row(&[1, 0, 1, 0, 1]);
        let labels = label_connected_components(&skeleton, ConnectivityType::EightWay).unwrap();
        let band = BinaryMask::new(5, 1).unwrap();
        let pruned = prune_redundant_components(&skeleton, &labels, &band, 100).unwrap();
        assert_eq!(pruned, skeleton);
    }

    #[test]
    fn test_unlabeled_skeleton_pixels_kept() {
        // A junction pixel has no bridge label and must survive
        let skeleton = row(&[1, 1, 1]);
        let labels = LabelImage::from_vec(3, 1, vec![1, 0, 2]).unwrap();
        let band = row(&[1, 1, 1]);
        let pruned = prune_redundant_components(&skeleton, &labels, &band, 10).unwrap();
        assert_eq!(pruned.data(), &[0, 1, 0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let skeleton = row(&[1, 1]);
        let labels = LabelImage::new(2, 1).unwrap();
        let band = row(&[1, 1, 1]);
        assert!(matches!(
            prune_redundant_components(&skeleton, &labels, &band, 5),
            Err(RegionError::Core(Error::DimensionMismatch { .. }))
        ));
        assert!(redundant_labels(&labels, &band, 5).is_err());
    }
}
