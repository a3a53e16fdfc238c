//! 1D sampler over hit rate

use crate::probability::{cap_probability, effect_probability};
use crate::types::constants::DEFAULT_SAMPLES;
use crate::types::{HitRateRange, SweepParams};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::linspace;

/// Capped probabilities along a hit-rate sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRateSweep {
    /// Capped probability for each hit rate
    pub probabilities: Array1<f64>,
    /// Hit rates the probabilities were evaluated at
    pub hit_rates: Array1<f64>,
}

impl HitRateSweep {
    /// Sample with an explicit parameter set (including sample count)
    pub fn sample(params: &SweepParams) -> Self {
        Self::sample_n(
            params.base_effect,
            params.enemy_resistance,
            params.debuff_resistance,
            params.range,
            params.samples,
        )
    }

    /// Sample `samples` points over `range`
    pub fn sample_n(
        base_effect: f64,
        enemy_resistance: f64,
        debuff_resistance: f64,
        range: HitRateRange,
        samples: usize,
    ) -> Self {
        let hit_rates = linspace(range.start, range.stop, samples);
        let probabilities = hit_rates.mapv(|hit_rate| {
            cap_probability(effect_probability(
                base_effect,
                hit_rate,
                enemy_resistance,
                debuff_resistance,
            ))
        });

        tracing::debug!(
            base_effect,
            enemy_resistance,
            debuff_resistance,
            start = range.start,
            stop = range.stop,
            samples,
            "sampled hit-rate sweep"
        );

        HitRateSweep {
            probabilities,
            hit_rates,
        }
    }

    pub fn len(&self) -> usize {
        self.hit_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hit_rates.is_empty()
    }

    /// (hit rate %, probability %) pairs for the line view
    pub fn percent_points(&self) -> Vec<(f64, f64)> {
        self.hit_rates
            .iter()
            .zip(self.probabilities.iter())
            .map(|(hr, p)| (hr * 100.0, p * 100.0))
            .collect()
    }

    /// First hit rate at which the capped probability reaches certainty
    pub fn first_capped_hit_rate(&self) -> Option<f64> {
        self.hit_rates
            .iter()
            .zip(self.probabilities.iter())
            .find(|(_, p)| **p >= 1.0)
            .map(|(hr, _)| *hr)
    }
}

/// Capped probabilities over 50 hit rates from `hr_start` to `hr_stop`
pub fn sample_over_hitrate(
    base_effect: f64,
    enemy_resistance: f64,
    debuff_resistance: f64,
    hr_start: f64,
    hr_stop: f64,
) -> HitRateSweep {
    HitRateSweep::sample_n(
        base_effect,
        enemy_resistance,
        debuff_resistance,
        HitRateRange::new(hr_start, hr_stop),
        DEFAULT_SAMPLES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_length_and_endpoints() {
        let sweep = sample_over_hitrate(0.3, 0.1, 0.0, 0.25, 0.75);
        assert_eq!(sweep.len(), 50);
        assert_eq!(sweep.probabilities.len(), 50);
        assert_eq!(sweep.hit_rates[0], 0.25);
        assert_eq!(sweep.hit_rates[49], 0.75);
    }

    #[test]
    fn test_caps_at_certainty() {
        // 1.0 * (1 + 1.5) * 1 = 2.5 raw at the end of the sweep
        let sweep = sample_over_hitrate(1.0, 0.0, 0.0, 0.0, 1.5);
        assert_eq!(sweep.hit_rates[49], 1.5);
        assert_eq!(sweep.probabilities[49], 1.0);
        assert_eq!(sweep.probabilities[0], 1.0);
    }

    #[test]
    fn test_uncapped_values_match_formula() {
        let sweep = sample_over_hitrate(0.2, 0.3, 0.1, 0.0, 1.5);
        for (hr, p) in sweep.hit_rates.iter().zip(sweep.probabilities.iter()) {
            let raw = effect_probability(0.2, *hr, 0.3, 0.1);
            assert!(raw < 1.0);
            assert_eq!(*p, raw);
        }
    }

    #[test]
    fn test_no_lower_cap() {
        let sweep = sample_over_hitrate(0.5, 1.5, 0.0, 0.0, 1.0);
        assert!(sweep.probabilities.iter().all(|p| *p < 0.0));
    }

    #[test]
    fn test_percent_points() {
        let sweep = sample_over_hitrate(0.3, 0.0, 0.0, 0.0, 1.5);
        let points = sweep.percent_points();
        assert_eq!(points.len(), 50);
        assert!((points[0].1 - 30.0).abs() < 1e-9);
        assert!((points[49].0 - 150.0).abs() < 1e-9);
        assert!((points[49].1 - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_capped_hit_rate() {
        let sweep = sample_over_hitrate(0.5, 0.0, 0.0, 0.0, 1.5);
        // 0.5 * (1 + hr) >= 1 once hr >= 1.0
        let hr = sweep.first_capped_hit_rate().unwrap();
        assert!(hr >= 1.0);
        assert!(hr < 1.0 + 1.5 / 49.0);

        let low = sample_over_hitrate(0.1, 0.0, 0.0, 0.0, 1.5);
        assert!(low.first_capped_hit_rate().is_none());
    }

    #[test]
    fn test_explicit_sample_count() {
        let params = SweepParams {
            samples: 7,
            ..SweepParams::default()
        };
        let sweep = HitRateSweep::sample(&params);
        assert_eq!(sweep.len(), 7);
        assert_eq!(sweep.hit_rates[6], 1.5);
    }
}
