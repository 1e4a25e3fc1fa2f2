//! skelprune-region - Region processing for skeleton pruning
//!
//! This crate provides the region-level stages of the pruning pipeline:
//!
//! - **Connected component analysis** - Union-find labeling and component statistics
//! - **Border tracing** - Outer contours of a region mask
//! - **Distance function** - Chamfer distance to the background
//! - **Redundant component pruning** - Removing short branches that touch the boundary band
//! - **Inscribed-arc pruning** - Removing skeleton pixels whose inscribed circle
//!   touches the contour within a narrow arc
//!
//! # Examples
//!
//! ## Finding connected components
//!
//! ```
//! use skelprune_core::BinaryMask;
//! use skelprune_region::{ConnectivityType, find_connected_components};
//!
//! let mut mask = BinaryMask::new(100, 100).unwrap();
//! mask.set_pixel(10, 10, 1).unwrap();
//! mask.set_pixel(11, 10, 1).unwrap();
//! mask.set_pixel(50, 50, 1).unwrap();
//!
//! let components = find_connected_components(&mask, ConnectivityType::FourWay).unwrap();
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0].pixel_count, 2);
//! ```
//!
//! ## Contour of a region
//!
//! ```
//! use skelprune_core::BinaryMask;
//! use skelprune_region::{ContourMode, contour_mask_with};
//!
//! let region = BinaryMask::from_vec(4, 4, vec![1; 16]).unwrap();
//! let contour = contour_mask_with(&region, ContourMode::External).unwrap();
//! assert_eq!(contour.count_foreground(), 12);
//! ```

pub mod arcprune;
pub mod ccbord;
pub mod conncomp;
pub mod distance;
pub mod error;
pub mod label;
pub mod prune;

// Re-export core types
pub use skelprune_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ConnectedComponent, ConnectivityType, MAX_LABEL, extract_component,
    find_connected_components, label_connected_components,
};

// Re-export label functions
pub use label::{count_components, get_component_sizes};

// Re-export ccbord types and functions
pub use ccbord::{
    Border, BorderPoint, ContourMode, Direction, contour_mask, contour_mask_with, contour_points,
    get_outer_borders,
};

// Re-export distance function
pub use distance::distance_function;

// Re-export pruning types and functions
pub use arcprune::{ArcPruneOptions, DEFAULT_ARC_MARGIN, prune_by_inscribed_arc};
pub use prune::{
    DEFAULT_REDUNDANT_THRESHOLD, prune_redundant_components, redundant_labels, remove_labels,
};
