// src/simulation/results.rs

use crate::core::{GrovizError, ProbabilitySnapshot};
use std::fmt;

/// Ordered history of probability snapshots across one search run.
///
/// Index 0 is the uniform-superposition snapshot; index k is the
/// distribution after k amplification rounds, so the length is always
/// roundCount + 1 for a simulator-produced trace. Read-only once the run
/// completes; the interpolator borrows it without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTrace {
    snapshots: Vec<ProbabilitySnapshot>,
}

impl ProbabilityTrace {
    /// Creates a new, empty trace. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Builds a trace from raw probability vectors. Intended for renderers
    /// and tests that drive the interpolator without running a simulation.
    ///
    /// Every distribution must have the same dimension N, since a snapshot
    /// is a fixed-size sequence over the basis states.
    ///
    /// # Errors
    /// * `InvalidParameter` when the distributions have differing lengths.
    pub fn from_distributions<I>(distributions: I) -> Result<Self, GrovizError>
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let snapshots: Vec<ProbabilitySnapshot> = distributions
            .into_iter()
            .map(ProbabilitySnapshot::from_probabilities)
            .collect();

        if let Some(first) = snapshots.first() {
            let dim = first.dim();
            for (round, snapshot) in snapshots.iter().enumerate() {
                if snapshot.dim() != dim {
                    return Err(GrovizError::InvalidParameter {
                        message: format!(
                            "snapshot {} has dimension {}, expected {} (all snapshots cover the same basis)",
                            round,
                            snapshot.dim(),
                            dim
                        ),
                    });
                }
            }
        }
        Ok(Self { snapshots })
    }

    /// Appends the snapshot for the next round. (Internal visibility)
    pub(crate) fn record(&mut self, snapshot: ProbabilitySnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Number of snapshots (round count + 1 for a completed run).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no snapshot has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The full ordered snapshot sequence.
    pub fn snapshots(&self) -> &[ProbabilitySnapshot] {
        &self.snapshots
    }

    /// The snapshot after `round` rounds, if recorded.
    pub fn snapshot(&self, round: usize) -> Option<&ProbabilitySnapshot> {
        self.snapshots.get(round)
    }

    /// The final distribution of the run, if any snapshot exists.
    pub fn final_snapshot(&self) -> Option<&ProbabilitySnapshot> {
        self.snapshots.last()
    }
}

impl fmt::Display for ProbabilityTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapshots.is_empty() {
            return writeln!(f, "ProbabilityTrace[empty]");
        }
        // Label width follows from the dimension: N = 2^n basis states.
        let dim = self.snapshots[0].dim();
        let num_qubits = dim.trailing_zeros() as usize;

        writeln!(f, "ProbabilityTrace[{} snapshots]", self.snapshots.len())?;
        for (round, snapshot) in self.snapshots.iter().enumerate() {
            if round == 0 {
                writeln!(f, "  Initial superposition:")?;
            } else {
                writeln!(f, "  After round {}:", round)?;
            }
            for (index, p) in snapshot.probabilities().iter().enumerate() {
                writeln!(f, "    |{:0width$b}⟩ -> {:.4}", index, p, width = num_qubits)?;
            }
        }
        Ok(())
    }
}
