//! 2D sampler over hit rate x enemy resistance

use crate::probability::{cap_probability, effect_probability};
use crate::types::constants::{DEFAULT_HR_START, DEFAULT_HR_STOP, DEFAULT_SAMPLES};
use crate::types::GridParams;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use super::{linspace, meshgrid};

/// Capped probabilities over every hit-rate / resistance combination.
///
/// All three arrays share one shape: rows follow resistance, columns
/// follow hit rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityGrid {
    pub probabilities: Array2<f64>,
    pub hit_rates: Array2<f64>,
    pub resistances: Array2<f64>,
}

impl ProbabilityGrid {
    pub fn sample(params: &GridParams) -> Self {
        sample_grid(params.base_effect, params.min_enemy_res, params.max_enemy_res)
    }

    /// (rows, columns) = (resistance samples, hit-rate samples)
    pub fn dim(&self) -> (usize, usize) {
        self.probabilities.dim()
    }

    /// Smallest and largest probability, ignoring NaN
    pub fn probability_bounds(&self) -> (f64, f64) {
        self.probabilities
            .iter()
            .filter(|p| !p.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            })
    }

    /// (min, max) hit rate covered by the grid
    pub fn hit_rate_bounds(&self) -> (f64, f64) {
        axis_bounds(&self.hit_rates)
    }

    /// (min, max) resistance covered by the grid
    pub fn resistance_bounds(&self) -> (f64, f64) {
        axis_bounds(&self.resistances)
    }
}

fn axis_bounds(axis: &Array2<f64>) -> (f64, f64) {
    let first = axis.first().copied().unwrap_or(0.0);
    let last = axis.last().copied().unwrap_or(0.0);
    (first.min(last), first.max(last))
}

/// Capped probabilities over a 50x50 grid.
///
/// Hit rate always spans `[0, 1.5]`; resistance spans
/// `[min_enemy_res, max_enemy_res]`. Debuff resistance is always zero.
pub fn sample_grid(base_effect: f64, min_enemy_res: f64, max_enemy_res: f64) -> ProbabilityGrid {
    let hit_rate_axis = linspace(DEFAULT_HR_START, DEFAULT_HR_STOP, DEFAULT_SAMPLES);
    let resistance_axis = linspace(min_enemy_res, max_enemy_res, DEFAULT_SAMPLES);

    let (hit_rates, resistances) = meshgrid(&hit_rate_axis, &resistance_axis);

    let probabilities = Zip::from(&hit_rates)
        .and(&resistances)
        .map_collect(|&hit_rate, &resistance| {
            cap_probability(effect_probability(base_effect, hit_rate, resistance, 0.0))
        });

    tracing::debug!(
        base_effect,
        min_enemy_res,
        max_enemy_res,
        "sampled probability grid"
    );

    ProbabilityGrid {
        probabilities,
        hit_rates,
        resistances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let grid = sample_grid(0.3, 0.0, 0.4);
        assert_eq!(grid.dim(), (50, 50));
        assert_eq!(grid.hit_rates.dim(), (50, 50));
        assert_eq!(grid.resistances.dim(), (50, 50));
    }

    #[test]
    fn test_hit_rate_varies_along_columns_only() {
        let grid = sample_grid(0.3, 0.0, 0.4);
        let first_row = grid.hit_rates.row(0);
        for row in grid.hit_rates.rows() {
            assert_eq!(row, first_row);
        }
        let first_col = grid.resistances.column(0);
        for col in grid.resistances.columns() {
            assert_eq!(col, first_col);
        }
    }

    #[test]
    fn test_corner_at_max_resistance() {
        // hit rate 0, resistance 0.4: 0.3 * 1 * 0.6 = 0.18
        let grid = sample_grid(0.3, 0.0, 0.4);
        assert_eq!(grid.hit_rates[[49, 0]], 0.0);
        assert_eq!(grid.resistances[[49, 0]], 0.4);
        assert!((grid.probabilities[[49, 0]] - 0.18).abs() < 1e-12);
    }

    #[test]
    fn test_grid_caps() {
        let grid = sample_grid(0.9, 0.0, 0.4);
        assert!(grid.probabilities.iter().all(|p| *p <= 1.0));
        assert_eq!(grid.probabilities[[0, 49]], 1.0);
    }

    #[test]
    fn test_bounds() {
        let grid = ProbabilityGrid::sample(&GridParams::default());
        let (lo, hi) = grid.probability_bounds();
        assert!((lo - 0.18).abs() < 1e-12);
        assert!((hi - 0.75).abs() < 1e-12);
        assert_eq!(grid.hit_rate_bounds(), (0.0, 1.5));
        assert_eq!(grid.resistance_bounds(), (0.0, 0.4));
    }
}
