//! Error types for the Game of Life core

use thiserror::Error;

/// Failures raised by the grid, the transition engine and the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The supplied matrix is not a non-empty rectangle
    #[error("invalid grid shape: {reason}")]
    InvalidShape { reason: String },

    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("invalid rate '{value}': generations per minute must be between {min} and {max}")]
    InvalidRate { value: String, min: u32, max: u32 },

    #[error("the initial state has no living cells")]
    EmptyInitialState,

    #[error("operation not allowed while the animation is running")]
    SessionRunning,

    #[error("the animation task panicked")]
    TaskPanicked,
}

impl LifeError {
    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        LifeError::InvalidShape {
            reason: reason.into(),
        }
    }
}
