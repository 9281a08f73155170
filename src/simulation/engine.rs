// src/simulation/engine.rs

use crate::core::{AmplitudeVector, GrovizError, TargetSet};
use crate::operators;
use crate::validation;
use tracing::warn;

/// The round-by-round state machine of one search run. (Internal visibility)
///
/// Holds the current amplitude vector and the fixed target set; each step is
/// a pure transformation of the previous vector, mark then reflect. The
/// engine never looks at anything but the immediately preceding state.
pub(crate) struct SearchEngine {
    /// Current amplitude vector; replaced wholesale by each step.
    state: AmplitudeVector,
    /// Deduplicated marked indices, fixed for the whole run.
    targets: TargetSet,
    /// Rounds completed so far.
    round: usize,
}

impl SearchEngine {
    /// Initializes the engine in the uniform superposition over 2^n states,
    /// checking the target set against the resulting dimension.
    pub(crate) fn init(num_qubits: usize, targets: TargetSet) -> Result<Self, GrovizError> {
        if targets.is_empty() {
            return Err(GrovizError::InvalidParameter {
                message: "target set is empty, nothing to search for".to_string(),
            });
        }
        let state = operators::initialize_uniform(num_qubits)?;
        targets.check_dim(state.dim())?;

        Ok(Self {
            state,
            targets,
            round: 0,
        })
    }

    /// Applies one amplification round: phase-flip the targets, then
    /// reflect about the mean. Produces a fresh vector and publishes it as
    /// the engine state in a single assignment.
    ///
    /// After the transition, total probability is checked; drift beyond
    /// tolerance is reported as a warning and the run continues.
    pub(crate) fn step(&mut self) -> Result<&AmplitudeVector, GrovizError> {
        let marked = operators::mark_targets(&self.state, &self.targets)?;
        self.state = operators::reflect_about_mean(&marked);
        self.round += 1;

        if let Err(drift) = validation::check_normalization(
            &self.state,
            Some(validation::DRIFT_TOLERANCE),
        ) {
            warn!(
                round = self.round,
                total = drift.total,
                deviation = drift.deviation,
                "normalization drift: {}",
                drift
            );
        }

        Ok(&self.state)
    }

    /// Read access to the current amplitude vector.
    pub(crate) fn state(&self) -> &AmplitudeVector {
        &self.state
    }

    /// Rounds completed so far.
    #[allow(dead_code)]
    pub(crate) fn round(&self) -> usize {
        self.round
    }
}
