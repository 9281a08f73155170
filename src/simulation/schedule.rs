// src/simulation/schedule.rs

//! Round scheduling for the amplification loop.

use crate::core::GrovizError;
use std::f64::consts::PI;

/// Computes the number of amplification rounds that maximizes the marked
/// state probability: floor((π/4)·√(N/M)) for a search space of N states
/// with M marked.
///
/// Callers must deduplicate target indices before computing M; a
/// [`crate::core::TargetSet`] does this structurally.
///
/// # Errors
/// * `InvalidParameter` when N = 0, M = 0, or M > N.
pub fn optimal_rounds(num_states: usize, num_targets: usize) -> Result<usize, GrovizError> {
    if num_states == 0 {
        return Err(GrovizError::InvalidParameter {
            message: "search space must contain at least one state".to_string(),
        });
    }
    if num_targets == 0 {
        return Err(GrovizError::InvalidParameter {
            message: "at least one target state must be marked".to_string(),
        });
    }
    if num_targets > num_states {
        return Err(GrovizError::InvalidParameter {
            message: format!(
                "{} targets exceed the {} states of the search space",
                num_targets, num_states
            ),
        });
    }

    let ratio = num_states as f64 / num_targets as f64;
    Ok(((PI / 4.0) * ratio.sqrt()).floor() as usize)
}
