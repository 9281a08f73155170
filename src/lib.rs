// src/lib.rs

//! `groviz` - amplitude-amplification search simulation with animated
//! probability playback.
//!
//! The crate simulates a Grover-style search over N = 2^n basis states by
//! alternating a target-marking phase flip with a reflection about the mean
//! for a scheduled number of rounds, recording the probability distribution
//! after every round. The resulting trace is then tweened into a long,
//! smooth sequence of bar-height frames for an external renderer to play
//! back at a fixed tick.

pub mod core;
pub mod operators;
pub mod simulation;
pub mod animation;
pub mod validation;
pub mod backend;

// Re-export the most common types for easier top-level use
pub use core::{AmplitudeVector, GrovizError, ProbabilitySnapshot, TargetSet};
pub use simulation::{ProbabilityTrace, SearchSimulator, optimal_rounds};
pub use animation::{
    AnimationController,
    AnimationFrame,
    DEFAULT_SUBFRAMES,
    basis_labels,
    frame_at, // Also export the pure re-entrant form
    total_frames,
};
pub use backend::{ExecutionBackend, LocalSampler, MeasurementHistogram};

// Example 1: Search for |101> over 3 qubits and play back the trace.
// Demonstrates running the simulator, checking the amplified outcome, and
// driving the controller as a frame iterator.
/// ```
/// use groviz::{SearchSimulator, AnimationController, GrovizError};
///
/// # fn main() -> Result<(), GrovizError> {
/// let simulator = SearchSimulator::from_bitstrings(3, &["101"])?;
///
/// // N=8, M=1: floor(π/4·√8) = 2 rounds, so 3 snapshots.
/// let trace = simulator.run()?;
/// assert_eq!(trace.len(), 3);
///
/// // Two rounds drive the marked state |101> (index 5) above 94%.
/// let final_snapshot = trace.final_snapshot().unwrap();
/// assert!(final_snapshot.probabilities()[5] > 0.9);
///
/// // 100 sub-frames per transition; the trace is extended by one duplicate
/// // of its final snapshot, so playback holds the result steady at the end.
/// let controller = AnimationController::with_default_subframes(trace)?;
/// assert_eq!(controller.total_frames(), 300);
/// let frames: Vec<_> = controller.collect();
/// assert_eq!(frames.len(), 300);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Sample the final distribution through the backend seam.
/// ```
/// use groviz::{SearchSimulator, ExecutionBackend, LocalSampler, GrovizError};
///
/// # fn main() -> Result<(), GrovizError> {
/// let trace = SearchSimulator::from_bitstrings(3, &["101"])?.run()?;
/// let backend = LocalSampler::with_seed(7);
/// let histogram = backend.sample(trace.final_snapshot().unwrap(), 4096)?;
///
/// assert_eq!(histogram.shots(), 4096);
/// assert_eq!(histogram.most_frequent(), Some(5));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
