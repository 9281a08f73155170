// src/core/state.rs

use crate::core::GrovizError;
use num_complex::Complex;
use std::collections::BTreeSet;
use std::fmt;

/// Dense complex amplitude vector over the N = 2^n basis states of the
/// search space, indexed 0..N-1 by basis-state index.
///
/// Invariant: the sum of squared magnitudes is 1 within a small numerical
/// tolerance after every operator application. Each operator produces a new
/// vector; nothing mutates an `AmplitudeVector` in place once it has been
/// recorded into a trace.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeVector {
    amplitudes: Vec<Complex<f64>>,
}

impl AmplitudeVector {
    /// Creates an amplitude vector from a raw complex vector. Callers are
    /// responsible for normalization; validation happens during simulation.
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Builds an amplitude vector from explicit amplitudes, for callers
    /// that prepare states by hand (e.g. to feed
    /// [`crate::validation::check_normalization`] or the operators
    /// directly). Normalization is the caller's responsibility.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Self {
        Self::new(amplitudes)
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Gets the dimension N of the state vector.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Derives the probability distribution by squaring magnitudes
    /// elementwise. From this point on the data is a distinct type: a
    /// snapshot never flows back into amplitude arithmetic.
    pub fn probabilities(&self) -> ProbabilitySnapshot {
        ProbabilitySnapshot {
            probabilities: self.amplitudes.iter().map(|a| a.norm_sqr()).collect(),
        }
    }
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// Deduplicated set of basis-state indices to be marked by the oracle.
///
/// The set form guarantees that overlapping or duplicate target
/// specifications collapse to a single marking per round, and that the
/// marked-state count M fed to round scheduling is never inflated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    indices: BTreeSet<usize>,
}

impl TargetSet {
    /// Builds a target set from basis-state indices. Duplicates collapse.
    pub fn from_indices<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Builds a target set from fixed-length binary strings, e.g.
    /// `["0101", "1111"]` for a 4-qubit search.
    ///
    /// Every string must have length `num_qubits` and contain only '0' and
    /// '1'. The leftmost character is the most significant bit, so `"101"`
    /// denotes basis index 5.
    ///
    /// # Errors
    /// * `InvalidParameter` for a length mismatch or a non-binary character.
    pub fn from_bitstrings<S>(bitstrings: &[S], num_qubits: usize) -> Result<Self, GrovizError>
    where
        S: AsRef<str>,
    {
        let mut indices = BTreeSet::new();
        for s in bitstrings {
            let s = s.as_ref();
            if s.len() != num_qubits {
                return Err(GrovizError::InvalidParameter {
                    message: format!(
                        "target bitstring '{}' has length {}, expected {} (one bit per qubit)",
                        s,
                        s.len(),
                        num_qubits
                    ),
                });
            }
            let index = usize::from_str_radix(s, 2).map_err(|_| GrovizError::InvalidParameter {
                message: format!("target bitstring '{}' contains non-binary characters", s),
            })?;
            indices.insert(index);
        }
        Ok(Self { indices })
    }

    /// Number of distinct marked states (the M of round scheduling).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no state is marked.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` if `index` is marked.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Iterates over the marked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Checks that every marked index fits inside a state vector of the
    /// given dimension.
    ///
    /// # Errors
    /// * `DimensionMismatch` naming the first out-of-range index.
    pub fn check_dim(&self, dim: usize) -> Result<(), GrovizError> {
        // BTreeSet iterates ascending, so the last element is the maximum.
        if let Some(&max) = self.indices.iter().next_back() {
            if max >= dim {
                return Err(GrovizError::DimensionMismatch { index: max, dim });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TargetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Targets{{")?;
        for (i, idx) in self.indices.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, idx)?;
        }
        write!(f, "}}")
    }
}

/// Probability distribution over basis states at one point in a run.
///
/// Derived from an [`AmplitudeVector`] by squaring magnitudes; immutable
/// once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilitySnapshot {
    probabilities: Vec<f64>,
}

impl ProbabilitySnapshot {
    /// Creates a snapshot directly from a probability vector. Intended for
    /// renderers and tests that build traces by hand; simulation-produced
    /// snapshots come from [`AmplitudeVector::probabilities`].
    pub fn from_probabilities(probabilities: Vec<f64>) -> Self {
        Self { probabilities }
    }

    /// Provides read-only access to the distribution.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Gets the dimension N of the distribution.
    pub fn dim(&self) -> usize {
        self.probabilities.len()
    }

    /// Total probability mass. 1.0 up to accumulated floating error for any
    /// snapshot produced by the simulator.
    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }
}

impl fmt::Display for ProbabilitySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probabilities[")?;
        for (i, p) in self.probabilities.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, p)?;
        }
        write!(f, "]")
    }
}
