//! Upper cap at certainty
//!
//! Values below 1.0 pass through untouched. Anything that does not compare
//! below 1.0 (including NaN and +inf) becomes exactly 1.0. There is no
//! lower bound.

use crate::types::constants::PROBABILITY_CAP;
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};

/// Cap a single probability at 1.0
pub fn cap_probability(probability: f64) -> f64 {
    if probability < PROBABILITY_CAP {
        probability
    } else {
        PROBABILITY_CAP
    }
}

/// Cap every element, returning a new array of the same shape
pub fn cap_probabilities<S, D>(probabilities: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    probabilities.mapv(cap_probability)
}

/// Cap every element in place
pub fn cap_probabilities_in_place<S, D>(probabilities: &mut ArrayBase<S, D>)
where
    S: DataMut<Elem = f64>,
    D: Dimension,
{
    probabilities.mapv_inplace(cap_probability);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_below_cap_unchanged() {
        assert_eq!(cap_probability(0.36), 0.36);
        assert_eq!(cap_probability(-0.2), -0.2);
    }

    #[test]
    fn test_above_cap_clamped() {
        assert_eq!(cap_probability(2.5), 1.0);
        assert_eq!(cap_probability(1.0), 1.0);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(cap_probability(f64::NAN), 1.0);
        assert_eq!(cap_probability(f64::INFINITY), 1.0);
        assert_eq!(cap_probability(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_array_cap_keeps_shape() {
        let raw = array![[0.5, 1.2], [0.99, 3.0], [-1.0, 1.0]];
        let capped = cap_probabilities(&raw);
        assert_eq!(capped.shape(), raw.shape());
        assert_eq!(capped, array![[0.5, 1.0], [0.99, 1.0], [-1.0, 1.0]]);
    }

    #[test]
    fn test_in_place_cap() {
        let mut values = array![0.1, 1.7, 0.9];
        cap_probabilities_in_place(&mut values);
        assert_eq!(values, array![0.1, 1.0, 0.9]);
    }
}
