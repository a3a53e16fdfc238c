//! Uniform sample generation and mesh expansion

use ndarray::{Array1, Array2};

/// `num` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last element is exactly `stop`. A single sample is `start`.
/// `start > stop` gives a descending sequence.
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    match num {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            Array1::from_shape_fn(num, |i| {
                if i == num - 1 {
                    stop
                } else {
                    i as f64 * step + start
                }
            })
        }
    }
}

/// Expand two axes into co-indexed grids of shape `(y.len(), x.len())`.
///
/// Row `i` of the first grid is a copy of `x`; column `j` of the second
/// grid is a copy of `y`.
pub fn meshgrid(x: &Array1<f64>, y: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let dim = (y.len(), x.len());
    let xx = Array2::from_shape_fn(dim, |(_, j)| x[j]);
    let yy = Array2::from_shape_fn(dim, |(i, _)| y[i]);
    (xx, yy)
}
