//! Error types for terramix

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// The two channels of a pair refer to the same layer.
    #[error("channel pair must name two distinct layers, got {0} for both")]
    InvalidChannelPair(usize),

    /// An index on some axis of the grid is outside its bound.
    #[error("{axis} index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        bound: usize,
    },

    /// A weight buffer does not match the declared grid dimensions.
    #[error("weight buffer length {got} does not match height * width * layers = {expected}")]
    ShapeMismatch { got: usize, expected: usize },

    /// Brush radius must be positive and finite.
    #[error("brush radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}
