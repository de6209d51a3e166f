//! Grid construction errors.

/// Errors raised when building a grid document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}
