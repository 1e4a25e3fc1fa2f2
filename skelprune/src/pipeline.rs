//! Pipeline orchestration
//!
//! ```text
//! skeleton ─ arc prune? ─ zero border ─ topology ─ bridge ─ labels ─┐
//!                                                                   ├─ prune ─ output
//! region ─ closing? ─ contour ─ band ───────────────────────────────┘
//! ```
//!
//! Every stage borrows its inputs and allocates its output, so a run never
//! touches the caller's masks.

use crate::config::PruneConfig;
use crate::error::Result;
use skelprune_core::{BinaryMask, FloatMap, LabelImage};
use skelprune_morph::{TopologyMasks, boundary_band, classify_topology, close_safe_brick};
use skelprune_region::{
    ConnectivityType, ContourMode, contour_mask, contour_mask_with, distance_function,
    label_connected_components, prune_by_inscribed_arc, redundant_labels, remove_labels,
};
use std::borrow::Cow;
use tracing::debug;

/// Pruned skeleton together with the intermediate results
#[derive(Debug, Clone)]
pub struct PruneOutput {
    /// The pruned skeleton
    pub pruned: BinaryMask,
    /// Topology of the skeleton after arc pruning and border zeroing
    pub topology: TopologyMasks,
    /// 8-connected labels of `topology.bridge`
    pub labels: LabelImage,
    /// Boundary band the components were tested against
    pub band: BinaryMask,
    /// Labels of the removed components, ascending
    pub removed_labels: Vec<u32>,
    /// Pixels removed by redundant component pruning
    pub removed_pixels: usize,
    /// Pixels removed by inscribed-arc pruning
    pub arc_removed_pixels: usize,
}

/// Runs the pruning pipeline with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct SkeletonPruner {
    config: PruneConfig,
}

impl SkeletonPruner {
    /// Create a pruner, validating the configuration.
    ///
    /// # Errors
    ///
    /// See [`PruneConfig::validate`].
    pub fn new(config: PruneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &PruneConfig {
        &self.config
    }

    /// Prune `skeleton`, computed from `region`.
    ///
    /// When inscribed-arc pruning is enabled the radii come from the
    /// chamfer distance of the (closed) region.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Core`] if the masks differ in size.
    pub fn run(&self, skeleton: &BinaryMask, region: &BinaryMask) -> Result<PruneOutput> {
        self.run_inner(skeleton, region, None)
    }

    /// Like [`SkeletonPruner::run`], with the skeletonizer's own distance
    /// map for inscribed-arc pruning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Core`] unless all inputs share dimensions.
    pub fn run_with_distance(
        &self,
        skeleton: &BinaryMask,
        region: &BinaryMask,
        distance: &FloatMap,
    ) -> Result<PruneOutput> {
        skelprune_core::check_same_size(skeleton.dimensions(), distance.dimensions())?;
        self.run_inner(skeleton, region, Some(distance))
    }

    fn run_inner(
        &self,
        skeleton: &BinaryMask,
        region: &BinaryMask,
        distance: Option<&FloatMap>,
    ) -> Result<PruneOutput> {
        let config = &self.config;
        config.validate()?;
        skeleton.check_same_size(region)?;

        let region = match config.region_closing {
            Some(k) => Cow::Owned(close_safe_brick(region, k, k)?),
            None => Cow::Borrowed(region),
        };

        let mut working = match config.arc_options() {
            Some(options) => {
                let computed;
                let distance = match distance {
                    Some(d) => d,
                    None => {
                        computed = distance_function(&region);
                        &computed
                    }
                };
                let contour = contour_mask_with(&region, ContourMode::All)?;
                prune_by_inscribed_arc(skeleton, distance, &contour, &options)?
            }
            None => skeleton.clone(),
        };
        let arc_removed_pixels = skeleton.count_foreground() - working.count_foreground();

        // Skeletonizers leave artifacts on the outermost ring
        working.zero_border()?;

        let topology = classify_topology(&working);
        let labels = label_connected_components(&topology.bridge, ConnectivityType::EightWay)?;
        debug!(
            skeleton = working.count_foreground(),
            junction = topology.junction.count_foreground(),
            bridge = topology.bridge.count_foreground(),
            endpoint = topology.endpoint.count_foreground(),
            components = labels.max_label(),
            "classified skeleton"
        );

        let contour = contour_mask(&region)?;
        let band = boundary_band(&contour, config.dilate_kernel_size, config.even_kernel)?;
        debug!(
            contour = contour.count_foreground(),
            band = band.count_foreground(),
            "built boundary band"
        );

        let removed_labels = redundant_labels(&labels, &band, config.edge_redundant_threshold)?;
        let pruned = remove_labels(&working, &labels, &removed_labels)?;
        let removed_pixels = working.count_foreground() - pruned.count_foreground();
        debug!(
            removed_components = removed_labels.len(),
            removed_pixels,
            arc_removed_pixels,
            remaining = pruned.count_foreground(),
            "pruned skeleton"
        );

        Ok(PruneOutput {
            pruned,
            topology,
            labels,
            band,
            removed_labels,
            removed_pixels,
            arc_removed_pixels,
        })
    }
}

/// Prune `skeleton` against the boundary of `region` in one call.
///
/// # Errors
///
/// Returns an error for an invalid configuration or masks of different
/// sizes.
pub fn prune_skeleton(
    skeleton: &BinaryMask,
    region: &BinaryMask,
    config: &PruneConfig,
) -> Result<BinaryMask> {
    let pruner = SkeletonPruner::new(config.clone())?;
    Ok(pruner.run(skeleton, region)?.pruned)
}
