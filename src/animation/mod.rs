// src/animation/mod.rs

//! Turns a short trace of discrete snapshots into a long, smooth frame
//! sequence for fixed-rate bar-chart playback.
//!
//! The substance is [`frame_at`], a pure function from (trace, sub-frame
//! count, global frame index) to a frame; it holds no cursor, so it supports
//! seeking, restart, and cancellation for free. [`AnimationController`]
//! wraps it with an owned trace and a monotone cursor for callers that just
//! want an iterator to drive from a periodic tick.

use crate::core::GrovizError;
use crate::simulation::ProbabilityTrace;

/// Default number of interpolated sub-frames per snapshot transition.
pub const DEFAULT_SUBFRAMES: usize = 100;

/// Bar heights for one instant of playback. Ephemeral: computed on demand
/// from two adjacent snapshots, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    heights: Vec<f64>,
}

impl AnimationFrame {
    /// One bar height per basis state.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Number of bars (the dimension N of the search space).
    pub fn dim(&self) -> usize {
        self.heights.len()
    }
}

/// Total number of frames produced for a trace of M snapshots with F
/// sub-frames per transition.
///
/// The trace is logically extended by duplicating its final snapshot once,
/// giving the last segment a zero delta so the true final distribution is
/// held steady for its entire F sub-frames. Hence M extended snapshots make
/// M transitions: F·M frames.
pub fn total_frames(trace: &ProbabilityTrace, subframes: usize) -> usize {
    subframes * trace.len()
}

/// Computes the frame at a global playback index, pure and re-entrant.
///
/// For global index g, the bracketing pair is g div F and the fractional
/// position is (g mod F)/F; bar i linearly interpolates
/// `from_i − (from_i − to_i)·t`. At t = 0 the frame equals the earlier
/// snapshot exactly; the later snapshot is reached at t = 0 of the next
/// pair, never within this one.
///
/// # Errors
/// * `DegenerateTrace` when the trace has fewer than two snapshots.
/// * `InvalidParameter` when `subframes` is zero or `frame_index` is past
///   the end of playback.
pub fn frame_at(
    trace: &ProbabilityTrace,
    subframes: usize,
    frame_index: usize,
) -> Result<AnimationFrame, GrovizError> {
    if trace.len() < 2 {
        return Err(GrovizError::DegenerateTrace {
            message: format!(
                "interpolation needs at least 2 snapshots, trace has {}",
                trace.len()
            ),
        });
    }
    if subframes == 0 {
        return Err(GrovizError::InvalidParameter {
            message: "sub-frame count must be positive".to_string(),
        });
    }
    let total = total_frames(trace, subframes);
    if frame_index >= total {
        return Err(GrovizError::InvalidParameter {
            message: format!(
                "frame index {} out of range, playback has {} frames",
                frame_index, total
            ),
        });
    }

    let snapshots = trace.snapshots();
    let last = snapshots.len() - 1;
    // The duplicated final snapshot is virtual: the last pair reads the
    // final snapshot on both sides instead of materializing a copy.
    let pair = frame_index / subframes;
    let from = &snapshots[pair.min(last)];
    let to = &snapshots[(pair + 1).min(last)];

    let t = (frame_index % subframes) as f64 / subframes as f64;
    let heights = from
        .probabilities()
        .iter()
        .zip(to.probabilities())
        .map(|(a, b)| a - (a - b) * t)
        .collect();

    Ok(AnimationFrame { heights })
}

/// Owns a trace and a playback cursor; no ambient global state.
///
/// Advances monotonically one frame per call by default, which suits a
/// fixed-interval external tick; `seek` and `restart` expose the re-entrant
/// behaviour of [`frame_at`] for callers that need it. Stopping the tick
/// stops playback, and since frames are computed from the immutable trace,
/// cancellation at any point leaves no corrupted state.
#[derive(Debug, Clone)]
pub struct AnimationController {
    trace: ProbabilityTrace,
    subframes: usize,
    cursor: usize,
}

impl AnimationController {
    /// Creates a controller over a completed trace.
    ///
    /// # Errors
    /// * `DegenerateTrace` when the trace has fewer than two snapshots.
    /// * `InvalidParameter` when `subframes` is zero.
    pub fn new(trace: ProbabilityTrace, subframes: usize) -> Result<Self, GrovizError> {
        if trace.len() < 2 {
            return Err(GrovizError::DegenerateTrace {
                message: format!(
                    "interpolation needs at least 2 snapshots, trace has {}",
                    trace.len()
                ),
            });
        }
        if subframes == 0 {
            return Err(GrovizError::InvalidParameter {
                message: "sub-frame count must be positive".to_string(),
            });
        }
        Ok(Self {
            trace,
            subframes,
            cursor: 0,
        })
    }

    /// Creates a controller with the default sub-frame count of 100.
    pub fn with_default_subframes(trace: ProbabilityTrace) -> Result<Self, GrovizError> {
        Self::new(trace, DEFAULT_SUBFRAMES)
    }

    /// Total number of frames this playback will produce.
    pub fn total_frames(&self) -> usize {
        total_frames(&self.trace, self.subframes)
    }

    /// The next global frame index to be played, if playback is not done.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to an arbitrary frame index.
    ///
    /// # Errors
    /// * `InvalidParameter` when the index is past the end of playback.
    pub fn seek(&mut self, frame_index: usize) -> Result<(), GrovizError> {
        let total = self.total_frames();
        if frame_index >= total {
            return Err(GrovizError::InvalidParameter {
                message: format!(
                    "cannot seek to frame {}, playback has {} frames",
                    frame_index, total
                ),
            });
        }
        self.cursor = frame_index;
        Ok(())
    }

    /// Rewinds playback to the first frame.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    /// Borrows the trace this controller plays back.
    pub fn trace(&self) -> &ProbabilityTrace {
        &self.trace
    }
}

impl Iterator for AnimationController {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<AnimationFrame> {
        if self.cursor >= self.total_frames() {
            return None;
        }
        // Construction validated the trace and sub-frame count, and the
        // cursor is in range, so frame_at cannot fail here.
        let frame = frame_at(&self.trace, self.subframes, self.cursor).ok()?;
        self.cursor += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_frames().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

/// Basis-state labels for the renderer's x axis: `|b⟩` with b the
/// zero-padded binary index, e.g. `|000⟩`, `|001⟩`, ...
pub fn basis_labels(num_qubits: usize) -> Vec<String> {
    let dim = 1usize << num_qubits;
    (0..dim)
        .map(|i| format!("|{:0width$b}⟩", i, width = num_qubits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_zero_padded_kets() {
        let labels = basis_labels(3);
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "|000⟩");
        assert_eq!(labels[5], "|101⟩");
        assert_eq!(labels[7], "|111⟩");
    }

    #[test]
    fn controller_iterates_exactly_total_frames() -> Result<(), GrovizError> {
        let trace = ProbabilityTrace::from_distributions([vec![1.0, 0.0], vec![0.0, 1.0]])?;
        let controller = AnimationController::new(trace, 10)?;
        assert_eq!(controller.total_frames(), 20);
        assert_eq!(controller.count(), 20);
        Ok(())
    }
}
