// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `groviz::core::TypeName`
pub use error::GrovizError;
pub use state::{AmplitudeVector, ProbabilitySnapshot, TargetSet};
