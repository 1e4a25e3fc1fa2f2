//! Error types for skelprune-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] skelprune_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] skelprune_morph::MorphError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Too many components for the label type
    #[error("label overflow: more than {max} components")]
    LabelOverflow { max: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
