//! effect_core - Status effect landing probability for game balancing
//!
//! This library provides:
//! - Probability: the effect chance formula (scalar and broadcasting)
//! - Capping: clamping probabilities to certainty
//! - Sampling: hit-rate sweeps and hit-rate x resistance grids
//! - Config: TOML defaults for the explorer views

pub mod config;
pub mod prelude;
pub mod probability;
pub mod sampling;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, ExplorerConfig};
pub use probability::{
    cap_probabilities, cap_probability, effect_probability, effect_probability_broadcast,
    Operand, ShapeError,
};
pub use sampling::{
    linspace, meshgrid, sample_grid, sample_over_hitrate, HitRateSweep, ProbabilityGrid,
};
pub use types::{GridParams, HitRateRange, SweepParams};
