//! skelprune-morph - Morphological operations on skeleton and region masks
//!
//! This crate provides the neighborhood-based stages of the pruning
//! pipeline:
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Binary morphology: erosion, dilation, opening, closing, boundaries
//! - Skeleton topology: neighbor counts and junction / bridge / endpoint
//!   classification
//! - Boundary bands: the dilated contour used as an edge tolerance zone
//!
//! Every output pixel depends only on a bounded window of the input.

pub mod band;
pub mod binary;
mod error;
pub mod sel;
pub mod topology;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use band::{DEFAULT_BAND_KERNEL_SIZE, EvenKernelPolicy, boundary_band};
pub use binary::{
    BoundaryType, close, close_brick, close_safe_brick, dilate, dilate_brick, erode, erode_brick,
    extract_boundary, open, open_brick,
};
pub use topology::{NeighborCountMap, TopologyMasks, classify_topology, count_neighbors};
