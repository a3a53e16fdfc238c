//! Prelude module for convenient imports
//!
//! ```rust
//! use effect_core::prelude::*;
//! ```

// Formula
pub use crate::probability::{cap_probabilities, cap_probability, effect_probability, Operand};

// Sampling
pub use crate::sampling::{sample_grid, sample_over_hitrate, HitRateSweep, ProbabilityGrid};

// Parameters
pub use crate::types::{GridParams, HitRateRange, SweepParams};

// Config
pub use crate::config::ExplorerConfig;
