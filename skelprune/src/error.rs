//! Error types for the pruning pipeline

use thiserror::Error;

/// Errors that can occur while running the pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] skelprune_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] skelprune_morph::MorphError),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] skelprune_region::RegionError),

    /// Invalid pipeline configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
