// scaling_utils.rs

use ndarray::{Array2, Axis};

/// Normalizes a numeric dataset column by column onto `[0, 1]` with the
/// classic min-max transform `(x - min) / (max - min)`.
///
/// A constant column has no range to stretch; its entries map to `0.0`
/// rather than propagating a division by zero. An empty dataset maps to an
/// empty dataset.
///
/// ```
/// use knightml::scaling_utils::normalize;
/// use ndarray::array;
///
/// let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
/// let scaled = normalize(&data);
/// assert_eq!(scaled[[0, 0]], 0.0);
/// assert_eq!(scaled[[2, 1]], 1.0);
/// ```
pub fn normalize(data: &Array2<f64>) -> Array2<f64> {
    let mut scaled = data.clone();
    for mut column in scaled.axis_iter_mut(Axis(1)) {
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        if range == 0.0 {
            column.fill(0.0);
        } else {
            column.mapv_inplace(|x| (x - min) / range);
        }
    }
    scaled
}

/// Standardizes a numeric dataset column by column with the z-score
/// transform `(x - mean) / std`, using the sample standard deviation
/// (`n - 1` divisor, matching pandas).
///
/// A constant column (or a single-row dataset, where the sample deviation is
/// undefined) maps to `0.0`. An empty dataset maps to an empty dataset.
pub fn standardize(data: &Array2<f64>) -> Array2<f64> {
    let mut scaled = data.clone();
    for mut column in scaled.axis_iter_mut(Axis(1)) {
        let n = column.len();
        if n < 2 {
            column.fill(0.0);
            continue;
        }
        let mean = column.sum() / n as f64;
        let var = column.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0);
        let std = var.sqrt();
        if std == 0.0 {
            column.fill(0.0);
        } else {
            column.mapv_inplace(|x| (x - mean) / std);
        }
    }
    scaled
}
