// src/operators/mod.rs

//! The two defining operators of amplitude amplification, plus uniform
//! state preparation.
//!
//! Each function consumes a state by reference and produces a fresh
//! [`AmplitudeVector`]; nothing here mutates its input. One round of the
//! search is `mark_targets` followed by `reflect_about_mean`.

use crate::core::{AmplitudeVector, GrovizError, TargetSet};
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()

/// Prepares the uniform superposition over N = 2^n basis states: every
/// amplitude equal to 1/√N, unit norm up to floating rounding.
///
/// # Errors
/// * `InvalidParameter` when `num_qubits` is zero or 2^n overflows `usize`.
pub fn initialize_uniform(num_qubits: usize) -> Result<AmplitudeVector, GrovizError> {
    if num_qubits == 0 {
        return Err(GrovizError::InvalidParameter {
            message: "cannot prepare a superposition over zero qubits".to_string(),
        });
    }
    let dim = 1usize
        .checked_shl(num_qubits as u32)
        .ok_or_else(|| GrovizError::InvalidParameter {
            message: format!(
                "qubit count {} too large, state vector dimension overflows usize",
                num_qubits
            ),
        })?;

    let amplitude = Complex::new(1.0 / (dim as f64).sqrt(), 0.0);
    Ok(AmplitudeVector::new(vec![amplitude; dim]))
}

/// The oracle: flips the phase of every marked basis state by negating its
/// amplitude.
///
/// All marked indices are flipped in one combined pass per round, never as a
/// chain of per-target flips, so overlapping target specifications cannot
/// double-negate. Magnitudes are unchanged at every index.
///
/// # Errors
/// * `DimensionMismatch` when a target index lies outside `[0, N)`.
pub fn mark_targets(
    vector: &AmplitudeVector,
    targets: &TargetSet,
) -> Result<AmplitudeVector, GrovizError> {
    targets.check_dim(vector.dim())?;

    let mut amplitudes = vector.amplitudes().to_vec();
    for index in targets.iter() {
        amplitudes[index] = -amplitudes[index];
    }
    Ok(AmplitudeVector::new(amplitudes))
}

/// The diffusion operator: reflects every amplitude about the arithmetic
/// mean, a_i ↦ 2μ − a_i.
///
/// This is the sole amplification step; it redistributes probability toward
/// whichever states the oracle has pushed below the mean.
pub fn reflect_about_mean(vector: &AmplitudeVector) -> AmplitudeVector {
    let dim = vector.dim();
    let sum = vector
        .amplitudes()
        .iter()
        .fold(Complex::zero(), |acc, a| acc + a);
    let mean = sum / dim as f64;

    let amplitudes = vector
        .amplitudes()
        .iter()
        .map(|a| 2.0 * mean - a)
        .collect();
    AmplitudeVector::new(amplitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn uniform_preparation_has_unit_norm() -> Result<(), GrovizError> {
        for n in 1..=6 {
            let state = initialize_uniform(n)?;
            assert_eq!(state.dim(), 1 << n);
            let expected = 1.0 / ((1 << n) as f64).sqrt();
            for amp in state.amplitudes() {
                assert!((amp.re - expected).abs() < TEST_TOLERANCE);
                assert!(amp.im.abs() < TEST_TOLERANCE);
            }
            let norm_sq: f64 = state.amplitudes().iter().map(|a| a.norm_sqr()).sum();
            assert!((norm_sq - 1.0).abs() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn uniform_preparation_rejects_zero_qubits() {
        assert!(matches!(
            initialize_uniform(0),
            Err(GrovizError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn marking_flips_sign_only_at_targets() -> Result<(), GrovizError> {
        let state = initialize_uniform(2)?;
        let targets = TargetSet::from_indices([1, 3]);
        let marked = mark_targets(&state, &targets)?;

        for (i, (before, after)) in state
            .amplitudes()
            .iter()
            .zip(marked.amplitudes())
            .enumerate()
        {
            let expected = if targets.contains(i) { -before } else { *before };
            assert_eq!(*after, expected, "index {}", i);
            // Magnitude must be untouched everywhere, targets included.
            assert!((after.norm_sqr() - before.norm_sqr()).abs() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn marking_rejects_out_of_range_index() -> Result<(), GrovizError> {
        let state = initialize_uniform(2)?;
        let targets = TargetSet::from_indices([4]);
        assert_eq!(
            mark_targets(&state, &targets),
            Err(GrovizError::DimensionMismatch { index: 4, dim: 4 })
        );
        Ok(())
    }

    #[test]
    fn reflection_matches_identity_on_hand_vector() {
        // Hand-constructed 4-element vector, mean = 0.25.
        let state = AmplitudeVector::new(vec![
            Complex::new(0.1, 0.0),
            Complex::new(0.2, 0.0),
            Complex::new(0.3, 0.0),
            Complex::new(0.4, 0.0),
        ]);
        let reflected = reflect_about_mean(&state);
        let mean: Complex<f64> = Complex::new(0.25, 0.0);
        for (old, new) in state.amplitudes().iter().zip(reflected.amplitudes()) {
            let expected = 2.0 * mean - old;
            assert!((new - expected).norm_sqr() < TEST_TOLERANCE * TEST_TOLERANCE);
        }
    }
}
