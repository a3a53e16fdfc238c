//! Elementwise evaluation over scalars and arrays of any shape
//!
//! Shapes combine by the usual broadcasting rule: align from the trailing
//! axis, and each axis must either match or have length 1.

use super::effect_probability;
use ndarray::{arr0, Array, ArrayD, ArrayView, ArrayViewD, CowArray, Dimension, IxDyn, Zip};
use thiserror::Error;

/// Broadcasting failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("operands could not be broadcast together with shapes {0:?}")]
    Incompatible(Vec<Vec<usize>>),
}

/// One input of the formula: a scalar or an n-dimensional array
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl Operand {
    pub fn shape(&self) -> &[usize] {
        match self {
            Operand::Scalar(_) => &[],
            Operand::Array(array) => array.shape(),
        }
    }

    fn as_array(&self) -> CowArray<'_, f64, IxDyn> {
        match self {
            Operand::Scalar(value) => CowArray::from(arr0(*value).into_dyn()),
            Operand::Array(array) => CowArray::from(array.view()),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<D: Dimension> From<Array<f64, D>> for Operand {
    fn from(array: Array<f64, D>) -> Self {
        Operand::Array(array.into_dyn())
    }
}

impl<D: Dimension> From<&Array<f64, D>> for Operand {
    fn from(array: &Array<f64, D>) -> Self {
        Operand::Array(array.clone().into_dyn())
    }
}

impl<'a, D: Dimension> From<ArrayView<'a, f64, D>> for Operand {
    fn from(view: ArrayView<'a, f64, D>) -> Self {
        Operand::Array(view.to_owned().into_dyn())
    }
}

/// Common shape of a set of operand shapes
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>, ShapeError> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut result = vec![1; ndim];

    for (axis, slot) in result.iter_mut().enumerate() {
        // Distance from the trailing axis
        let back = ndim - axis;
        for shape in shapes {
            if shape.len() < back {
                continue;
            }
            let len = shape[shape.len() - back];
            if len == 1 {
                continue;
            }
            if *slot == 1 {
                *slot = len;
            } else if *slot != len {
                return Err(incompatible(shapes));
            }
        }
    }

    Ok(result)
}

fn incompatible(shapes: &[&[usize]]) -> ShapeError {
    ShapeError::Incompatible(shapes.iter().map(|s| s.to_vec()).collect())
}

/// Evaluate the raw probability elementwise over broadcast operands.
///
/// The result is uncapped and has the broadcast shape of the four inputs.
/// Only a shape mismatch fails; numeric edge cases propagate as NaN/inf.
pub fn effect_probability_broadcast(
    base_effect: impl Into<Operand>,
    hit_rate: impl Into<Operand>,
    enemy_resistance: impl Into<Operand>,
    debuff_resistance: impl Into<Operand>,
) -> Result<ArrayD<f64>, ShapeError> {
    let operands = [
        base_effect.into(),
        hit_rate.into(),
        enemy_resistance.into(),
        debuff_resistance.into(),
    ];
    let shapes: Vec<&[usize]> = operands.iter().map(Operand::shape).collect();
    let shape = broadcast_shape(&shapes)?;

    let arrays: Vec<CowArray<'_, f64, IxDyn>> = operands.iter().map(Operand::as_array).collect();
    let views = arrays
        .iter()
        .map(|array| array.broadcast(IxDyn(&shape)))
        .collect::<Option<Vec<ArrayViewD<'_, f64>>>>()
        .ok_or_else(|| incompatible(&shapes))?;

    let mut out = ArrayD::<f64>::zeros(IxDyn(&shape));
    Zip::from(&mut out)
        .and(&views[0])
        .and(&views[1])
        .and(&views[2])
        .and(&views[3])
        .for_each(|p, &base, &hit, &res, &debuff| {
            *p = effect_probability(base, hit, res, debuff);
        });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2, Ix1, Ix2};

    #[test]
    fn test_all_scalars_give_zero_dim() {
        let out = effect_probability_broadcast(0.3, 0.5, 0.2, 0.0).unwrap();
        assert_eq!(out.ndim(), 0);
        assert!((out.sum() - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_vector_with_scalars() {
        let hit = array![0.0, 0.5, 1.0];
        let out = effect_probability_broadcast(0.2, hit, 0.0, 0.0)
            .unwrap()
            .into_dimensionality::<Ix1>()
            .unwrap();
        assert_eq!(out.len(), 3);
        assert!((out[[1]] - 0.3).abs() < 1e-12);
        assert!((out[[2]] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_column_by_row_broadcast() {
        let res: Array2<f64> = array![[0.0], [0.5], [1.0]];
        let hit = array![0.0, 0.5, 1.0, 1.5];
        let out = effect_probability_broadcast(0.4, hit, res, 0.0)
            .unwrap()
            .into_dimensionality::<Ix2>()
            .unwrap();
        assert_eq!(out.dim(), (3, 4));
        // row 1 = 50% resistance, column 3 = 150% hit rate: 0.4 * 2.5 * 0.5
        assert!((out[[1, 3]] - 0.5).abs() < 1e-12);
        // full resistance row is all zero
        assert!(out.row(2).iter().all(|p| p.abs() < f64::EPSILON));
    }

    #[test]
    fn test_incompatible_shapes() {
        let err = effect_probability_broadcast(0.3, array![0.0, 1.0], array![0.0, 0.1, 0.2], 0.0)
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::Incompatible(vec![vec![], vec![2], vec![3], vec![]])
        );
    }

    #[test]
    fn test_broadcast_shape_rules() {
        assert_eq!(broadcast_shape(&[&[3, 1], &[4]]).unwrap(), vec![3, 4]);
        assert_eq!(broadcast_shape(&[&[], &[5]]).unwrap(), vec![5]);
        assert_eq!(broadcast_shape(&[&[0], &[1]]).unwrap(), vec![0]);
        assert!(broadcast_shape(&[&[0], &[2]]).is_err());
        assert_eq!(broadcast_shape(&[]).unwrap(), Vec::<usize>::new());
    }
}
