//! skelprune-core - Basic data structures for skeleton post-processing
//!
//! This crate provides the value types shared by every stage of the
//! skeleton pruning pipeline:
//!
//! - [`BinaryMask`] - 0/1 mask (skeletons, region masks, contours, bands)
//! - [`LabelImage`] - connected component labels (0 = background)
//! - [`FloatMap`] - floating-point grid (distance maps)
//! - [`Box`] - rectangle regions (component bounds, search windows)
//!
//! All grids are row-major with no padding and are produced fresh by each
//! operation; only [`BinaryMask::zero_border`] mutates in place.

pub mod box_;
pub mod error;
pub mod fmap;
pub mod label;
pub mod mask;

pub use box_::Box;
pub use error::{Error, Result, check_same_size};
pub use fmap::FloatMap;
pub use label::LabelImage;
pub use mask::{BinaryMask, zero_border};
