// src/core/error.rs

//! Error handling logic

use std::fmt;

/// Error types for simulation setup and playback.
///
/// Everything here is a caller configuration error: each variant aborts the
/// run before a trace is produced, or aborts interpolation before a frame is
/// produced. Numerical drift during a run is deliberately *not* an error
/// variant; see [`crate::validation::NormalizationDrift`].
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum GrovizError {
    /// A supplied parameter is outside its domain: zero qubits, an empty or
    /// oversized target set for round scheduling, a malformed target
    /// bitstring, or a zero sub-frame count.
    InvalidParameter {
        /// InvalidParameter failure message
        message: String,
    },

    /// A target basis index lies outside the state vector's index range.
    DimensionMismatch {
        /// The offending basis-state index
        index: usize,
        /// The dimension of the state vector it was applied against
        dim: usize,
    },

    /// Fewer than two snapshots were handed to the interpolator, so there is
    /// no pair of distributions to tween between.
    DegenerateTrace {
        /// DegenerateTrace failure message
        message: String,
    },
}

impl fmt::Display for GrovizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrovizError::InvalidParameter { message } => {
                write!(f, "Invalid Parameter: {}", message)
            }
            GrovizError::DimensionMismatch { index, dim } => {
                write!(
                    f,
                    "Dimension Mismatch: basis index {} outside state vector of dimension {}",
                    index, dim
                )
            }
            GrovizError::DegenerateTrace { message } => {
                write!(f, "Degenerate Trace: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for GrovizError {}
