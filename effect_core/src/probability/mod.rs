//! Probability - Chance of a status effect landing
//!
//! Formula:
//! - probability = base_effect * (1 + hit_rate) * (1 - enemy_resistance) * (1 - debuff_resistance)
//!
//! Nothing is validated. Out-of-range inputs give out-of-range results
//! (negative, or above certainty) and callers cap them afterwards.

mod broadcast;
mod cap;

pub use broadcast::{broadcast_shape, effect_probability_broadcast, Operand, ShapeError};
pub use cap::{cap_probabilities, cap_probabilities_in_place, cap_probability};

/// Raw (uncapped) probability of an effect landing
///
/// # Arguments
/// * `base_effect` - Base chance of the effect (0.3 = 30%)
/// * `hit_rate` - Effect hit rate bonus of the attacker
/// * `enemy_resistance` - Effect resistance of the target
/// * `debuff_resistance` - Additional resistance when the effect is a debuff
pub fn effect_probability(
    base_effect: f64,
    hit_rate: f64,
    enemy_resistance: f64,
    debuff_resistance: f64,
) -> f64 {
    base_effect * (1.0 + hit_rate) * (1.0 - enemy_resistance) * (1.0 - debuff_resistance)
}

/// Hit rate needed to reach `target` probability against a given resistance.
///
/// Returns `None` when the resistances or base chance zero out the formula,
/// since no hit rate can move the result.
pub fn hit_rate_needed(
    target: f64,
    base_effect: f64,
    enemy_resistance: f64,
    debuff_resistance: f64,
) -> Option<f64> {
    let per_unit = base_effect * (1.0 - enemy_resistance) * (1.0 - debuff_resistance);
    if per_unit == 0.0 || !per_unit.is_finite() {
        return None;
    }
    Some(target / per_unit - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_modifiers() {
        let p = effect_probability(0.3, 0.0, 0.0, 0.0);
        assert!((p - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_rate_and_resistance() {
        // 0.3 * 1.5 * 0.8 = 0.36
        let p = effect_probability(0.3, 0.5, 0.2, 0.0);
        assert!((p - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_debuff_resistance_multiplies() {
        // 0.5 * 2.0 * 0.5 * 0.5 = 0.25
        let p = effect_probability(0.5, 1.0, 0.5, 0.5);
        assert!((p - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_full_resistance_is_immune() {
        let p = effect_probability(0.8, 1.5, 1.0, 0.0);
        assert!(p.abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_resistance_amplifies() {
        // -50% resistance = 1.5x chance, no validation
        let p = effect_probability(0.4, 0.0, -0.5, 0.0);
        assert!((p - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_overcapped_raw_value_is_not_clamped() {
        let p = effect_probability(1.0, 1.5, 0.0, 0.0);
        assert!((p - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(effect_probability(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_hit_rate_needed() {
        // 0.3 base, 20% res: 0.24 per unit of (1 + hr); 0.48 needs hr = 1.0
        let needed = hit_rate_needed(0.48, 0.3, 0.2, 0.0).unwrap();
        assert!((needed - 1.0).abs() < 1e-12);
        assert!(hit_rate_needed(0.5, 0.3, 1.0, 0.0).is_none());
    }
}
