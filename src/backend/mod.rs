// src/backend/mod.rs

//! Measurement sampling behind an explicit backend seam.
//!
//! The simulation core produces distributions; turning a distribution into
//! shot counts is a backend concern. The seam is a trait chosen by the
//! caller before the run starts, never discovered reactively, so a remote
//! execution service slots in as another implementation without touching
//! the core.

use crate::core::{GrovizError, ProbabilitySnapshot};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A measurement executor selected by dependency injection.
pub trait ExecutionBackend {
    /// Human-readable backend name for run reporting.
    fn name(&self) -> &str;

    /// Draws `shots` measurement outcomes from a probability distribution.
    ///
    /// # Errors
    /// * `InvalidParameter` for zero shots or an empty distribution.
    fn sample(
        &self,
        snapshot: &ProbabilitySnapshot,
        shots: u32,
    ) -> Result<MeasurementHistogram, GrovizError>;
}

/// Local sampling backend drawing outcomes with a seeded PRNG.
///
/// With an explicit seed the histogram is fully reproducible. Without one,
/// the seed is hashed from the distribution itself, so identical inputs
/// still sample identically across runs.
#[derive(Debug, Clone, Default)]
pub struct LocalSampler {
    seed: Option<u64>,
}

impl LocalSampler {
    /// Creates a sampler seeded from the distribution under measurement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sampler with a fixed seed for reproducible histograms.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn seed_for(&self, snapshot: &ProbabilitySnapshot) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let mut hasher = DefaultHasher::new();
                for p in snapshot.probabilities() {
                    p.to_ne_bytes().hash(&mut hasher);
                }
                hasher.finish()
            }
        }
    }
}

impl ExecutionBackend for LocalSampler {
    fn name(&self) -> &str {
        "local-sampler"
    }

    fn sample(
        &self,
        snapshot: &ProbabilitySnapshot,
        shots: u32,
    ) -> Result<MeasurementHistogram, GrovizError> {
        if shots == 0 {
            return Err(GrovizError::InvalidParameter {
                message: "shot count must be positive".to_string(),
            });
        }
        let dim = snapshot.dim();
        if dim == 0 {
            return Err(GrovizError::InvalidParameter {
                message: "cannot sample from an empty distribution".to_string(),
            });
        }

        let total = snapshot.total();
        let mut rng = StdRng::seed_from_u64(self.seed_for(snapshot));
        let mut counts: HashMap<usize, u32> = HashMap::new();

        for _ in 0..shots {
            let p_sample: f64 = rng.random::<f64>() * total;
            let mut cumulative = 0.0;
            // Fall back to the last index if floating error pushes the
            // sample point past the cumulative total.
            let mut outcome = dim - 1;
            for (index, p) in snapshot.probabilities().iter().enumerate() {
                cumulative += p;
                if p_sample < cumulative {
                    outcome = index;
                    break;
                }
            }
            *counts.entry(outcome).or_insert(0) += 1;
        }

        Ok(MeasurementHistogram {
            counts,
            shots,
            num_qubits: dim.trailing_zeros() as usize,
        })
    }
}

/// Shot counts per measured basis state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementHistogram {
    counts: HashMap<usize, u32>,
    shots: u32,
    num_qubits: usize,
}

impl MeasurementHistogram {
    /// Count for a specific basis index (zero if never measured).
    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// All non-zero counts keyed by basis index.
    pub fn counts(&self) -> &HashMap<usize, u32> {
        &self.counts
    }

    /// Total shots drawn.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// The most frequently measured basis index, ties broken toward the
    /// lower index.
    pub fn most_frequent(&self) -> Option<usize> {
        self.counts
            .iter()
            .max_by_key(|(index, count)| (**count, std::cmp::Reverse(**index)))
            .map(|(index, _)| *index)
    }
}

impl fmt::Display for MeasurementHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results (State: Count):")?;
        // Sort by count descending, then by index for stable output.
        let mut sorted: Vec<_> = self.counts.iter().collect();
        sorted.sort_by_key(|(index, count)| (std::cmp::Reverse(**count), **index));
        for (index, count) in sorted {
            writeln!(
                f,
                "  |{:0width$b}⟩: {} times ({:.1}%)",
                index,
                count,
                *count as f64 / self.shots as f64 * 100.0,
                width = self.num_qubits
            )?;
        }
        Ok(())
    }
}
