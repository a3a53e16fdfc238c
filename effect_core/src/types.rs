//! Parameter types shared by the samplers and the views

use serde::{Deserialize, Serialize};

/// Sampling and formula constants
pub mod constants {
    /// Samples per axis for every sweep unless a count is given
    pub const DEFAULT_SAMPLES: usize = 50;

    /// Default hit-rate sweep bounds (0% to 150% bonus)
    pub const DEFAULT_HR_START: f64 = 0.0;
    pub const DEFAULT_HR_STOP: f64 = 1.5;

    /// Default base effect chance (30%)
    pub const DEFAULT_BASE_EFFECT: f64 = 0.3;

    /// Default enemy effect resistance span for the grid
    pub const DEFAULT_MIN_ENEMY_RES: f64 = 0.0;
    pub const DEFAULT_MAX_ENEMY_RES: f64 = 0.4;

    /// Probabilities never exceed certainty
    pub const PROBABILITY_CAP: f64 = 1.0;
}

use constants::{
    DEFAULT_BASE_EFFECT, DEFAULT_HR_START, DEFAULT_HR_STOP, DEFAULT_MAX_ENEMY_RES,
    DEFAULT_MIN_ENEMY_RES, DEFAULT_SAMPLES,
};

/// Inclusive hit-rate interval swept by the line view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRateRange {
    pub start: f64,
    pub stop: f64,
}

impl HitRateRange {
    pub fn new(start: f64, stop: f64) -> Self {
        HitRateRange { start, stop }
    }
}

impl Default for HitRateRange {
    fn default() -> Self {
        HitRateRange {
            start: DEFAULT_HR_START,
            stop: DEFAULT_HR_STOP,
        }
    }
}

/// Fixed inputs of a hit-rate sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepParams {
    /// Base chance of the effect landing
    pub base_effect: f64,
    /// Enemy effect resistance
    pub enemy_resistance: f64,
    /// Extra multiplicative reduction for debuffs
    pub debuff_resistance: f64,
    pub range: HitRateRange,
    pub samples: usize,
}

impl Default for SweepParams {
    fn default() -> Self {
        SweepParams {
            base_effect: DEFAULT_BASE_EFFECT,
            enemy_resistance: 0.0,
            debuff_resistance: 0.0,
            range: HitRateRange::default(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Inputs of the hit-rate x resistance grid.
///
/// The grid always evaluates with a debuff resistance of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub base_effect: f64,
    pub min_enemy_res: f64,
    pub max_enemy_res: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            base_effect: DEFAULT_BASE_EFFECT,
            min_enemy_res: DEFAULT_MIN_ENEMY_RES,
            max_enemy_res: DEFAULT_MAX_ENEMY_RES,
        }
    }
}
