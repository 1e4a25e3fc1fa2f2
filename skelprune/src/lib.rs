//! skelprune - Skeleton topology extraction and boundary-aware pruning
//!
//! Post-processes a raw binary skeleton (the medial axis of a 2D shape,
//! produced by an external skeletonizer) together with the region mask it
//! was computed from:
//!
//! - every skeleton pixel is classified as junction, bridge, or endpoint
//! - short bridge branches reaching into a band along the region's contour
//!   are removed as boundary artifacts
//!
//! # Overview
//!
//! The stages live in the member crates and are re-exported here as
//! modules:
//!
//! - [`morph`] - Topology classification, brick morphology, boundary band
//! - [`region`] - Component labeling, contour tracing, pruning
//!
//! [`SkeletonPruner`] runs the whole pipeline with a [`PruneConfig`].
//!
//! # Example
//!
//! ```
//! use skelprune::{BinaryMask, PruneConfig, prune_skeleton};
//!
//! // A 12x12 square region with a skeleton line through its middle
//! let region = BinaryMask::from_vec(12, 12, vec![1; 144]).unwrap();
//! let mut skeleton = BinaryMask::new(12, 12).unwrap();
//! for x in 2..10 {
//!     skeleton.set_pixel(x, 6, 1).unwrap();
//! }
//!
//! // The whole line lies within the 9x9 band and has 8 < 50 pixels
//! let pruned = prune_skeleton(&skeleton, &region, &PruneConfig::default()).unwrap();
//! assert!(pruned.is_empty());
//!
//! let lenient = PruneConfig::default().with_edge_redundant_threshold(5);
//! let pruned = prune_skeleton(&skeleton, &region, &lenient).unwrap();
//! assert_eq!(pruned, skeleton);
//! ```

mod config;
mod error;
mod pipeline;

pub use config::PruneConfig;
pub use error::{Error, Result};
pub use pipeline::{PruneOutput, SkeletonPruner, prune_skeleton};

// Re-export core types (primary data structures used everywhere)
pub use skelprune_core::{BinaryMask, Box, FloatMap, LabelImage, zero_border};

// Re-export stage crates as modules to avoid name conflicts
pub use skelprune_morph as morph;
pub use skelprune_region as region;
