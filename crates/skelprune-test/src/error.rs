//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// An ASCII mask drawing could not be parsed
    #[error("bad mask drawing at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// The drawing parsed but does not form a valid mask
    #[error("invalid mask: {0}")]
    Mask(#[from] skelprune_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
