//! Sampling - Evaluating the formula over hit-rate and resistance ranges

mod grid;
mod space;
mod sweep;

pub use grid::{sample_grid, ProbabilityGrid};
pub use space::{linspace, meshgrid};
pub use sweep::{sample_over_hitrate, HitRateSweep};
