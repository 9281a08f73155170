// src/validation/mod.rs

//! Normalization checks for amplitude vectors and probability snapshots.

use crate::core::{AmplitudeVector, ProbabilitySnapshot};
use std::fmt;

/// Default tolerance for strict normalization of freshly prepared states.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Tolerance above which accumulated floating error is worth reporting.
/// A monitoring threshold, not a correctness gate.
pub const DRIFT_TOLERANCE: f64 = 1e-6;

/// Non-fatal report that total probability has drifted from 1.0 beyond
/// tolerance. Surfaced via `tracing::warn!` by the simulator; the run
/// continues, since floating error accumulates harmlessly over a bounded
/// number of rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationDrift {
    /// Measured total probability mass.
    pub total: f64,
    /// Absolute deviation from 1.0.
    pub deviation: f64,
}

impl fmt::Display for NormalizationDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total probability {} deviates from 1.0 by {:.3e}",
            self.total, self.deviation
        )
    }
}

/// Checks that the sum of squared amplitude magnitudes is 1.0 within
/// `tolerance` (defaults to [`DEFAULT_NORM_TOLERANCE`]).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(NormalizationDrift)` describing the deviation otherwise.
pub fn check_normalization(
    state: &AmplitudeVector,
    tolerance: Option<f64>,
) -> Result<(), NormalizationDrift> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.amplitudes().iter().map(|c| c.norm_sqr()).sum();
    drift_check(norm_sq, effective_tolerance)
}

/// Checks that a probability snapshot sums to 1.0 within `tolerance`
/// (defaults to [`DRIFT_TOLERANCE`], the looser post-round threshold).
pub fn check_distribution(
    snapshot: &ProbabilitySnapshot,
    tolerance: Option<f64>,
) -> Result<(), NormalizationDrift> {
    let effective_tolerance = tolerance.unwrap_or(DRIFT_TOLERANCE);
    drift_check(snapshot.total(), effective_tolerance)
}

fn drift_check(total: f64, tolerance: f64) -> Result<(), NormalizationDrift> {
    let deviation = (total - 1.0).abs();
    if deviation > tolerance {
        Err(NormalizationDrift { total, deviation })
    } else {
        Ok(())
    }
}
