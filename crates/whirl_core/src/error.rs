//! Error types for whirl

use thiserror::Error;

/// Errors that can occur when configuring or driving a spinner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhirlError {
    /// No image source was resolvable from the builder or host overrides
    #[error("no image source specified for spinner")]
    MissingImageSource,

    /// Segment spec with a non-positive count, or a repeat that does not
    /// evenly divide the segment count
    #[error("invalid segment spec: {segments} segments with repeat {repeat}")]
    InvalidSegmentSpec { segments: u32, repeat: u32 },
}

/// Result type for whirl operations
pub type Result<T> = std::result::Result<T, WhirlError>;
