// src/simulation/mod.rs

//! Drives the amplitude-amplification search to completion, accumulating
//! the full probability history as it goes.
//!
//! This module contains the `SearchSimulator` entry point, the internal
//! `SearchEngine` round state machine, and the `ProbabilityTrace` produced
//! by a completed run.

mod results;
pub(crate) mod engine;
pub mod schedule;

// Re-export the main public interface types
pub use results::ProbabilityTrace;
pub use schedule::optimal_rounds;

use crate::core::{GrovizError, TargetSet};
use engine::SearchEngine;

/// Orchestrates one complete search run.
///
/// Construction validates the problem configuration; [`SearchSimulator::run`]
/// then walks the engine from the uniform superposition through the
/// scheduled number of rounds and records a snapshot per state, including
/// the initial one. The run is single-threaded and phase-sequential: the
/// trace is complete before any playback frame can be computed from it.
#[derive(Debug, Clone)]
pub struct SearchSimulator {
    num_qubits: usize,
    targets: TargetSet,
}

impl SearchSimulator {
    /// Creates a simulator for a search over 2^n basis states.
    ///
    /// # Errors
    /// * `InvalidParameter` for zero qubits or an empty target set.
    /// * `DimensionMismatch` for a target index outside `[0, 2^n)`.
    pub fn new(num_qubits: usize, targets: TargetSet) -> Result<Self, GrovizError> {
        if num_qubits == 0 {
            return Err(GrovizError::InvalidParameter {
                message: "search requires at least one qubit".to_string(),
            });
        }
        if targets.is_empty() {
            return Err(GrovizError::InvalidParameter {
                message: "target set is empty, nothing to search for".to_string(),
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
        targets.check_dim(dim)?;

        Ok(Self {
            num_qubits,
            targets,
        })
    }

    /// Convenience constructor taking fixed-length binary target strings,
    /// e.g. `["0101", "1111"]` for a 4-qubit search.
    pub fn from_bitstrings<S>(num_qubits: usize, bitstrings: &[S]) -> Result<Self, GrovizError>
    where
        S: AsRef<str>,
    {
        let targets = TargetSet::from_bitstrings(bitstrings, num_qubits)?;
        Self::new(num_qubits, targets)
    }

    /// The dimension N = 2^n of the search space.
    pub fn dim(&self) -> usize {
        1 << self.num_qubits
    }

    /// The deduplicated target set.
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// The number of rounds [`run`](Self::run) will execute.
    pub fn planned_rounds(&self) -> Result<usize, GrovizError> {
        optimal_rounds(self.dim(), self.targets.len())
    }

    /// Runs the search to completion.
    ///
    /// Records the uniform snapshot, then applies mark-then-reflect for each
    /// scheduled round, recording the distribution after every round. No
    /// intermediate snapshot is discarded.
    pub fn run(&self) -> Result<ProbabilityTrace, GrovizError> {
        let rounds = self.planned_rounds()?;
        let mut engine = SearchEngine::init(self.num_qubits, self.targets.clone())?;

        let mut trace = ProbabilityTrace::new();
        trace.record(engine.state().probabilities());

        for _ in 0..rounds {
            let state = engine.step()?;
            trace.record(state.probabilities());
        }

        Ok(trace)
    }
}
