// stats_utils.rs

use ndarray::{Array2, ArrayView1, Axis};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("series must have the same length (left: {left}, right: {right})")]
    ShapeMismatch { left: usize, right: usize },
    #[error("series must not be empty")]
    EmptyInput,
}

/// Computes the absolute Pearson correlation between a series and a target:
/// `|cov(x, y) / (std(x) * std(y))|`. Useful for ranking features by how
/// strongly they track a class column. When either side has zero deviation
/// the correlation is defined as `0.0`.
///
/// ```
/// use knightml::stats_utils::correlation_factor;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [10.0, 20.0, 30.0, 40.0];
/// assert!((correlation_factor(&x, &y).unwrap() - 1.0).abs() < 1e-9);
/// ```
pub fn correlation_factor(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    Ok(pearson(x, y)?.abs())
}

fn pearson(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::ShapeMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;
    let cov = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>();
    let var_x = x.iter().map(|a| (a - mean_x).powi(2)).sum::<f64>();
    let var_y = y.iter().map(|b| (b - mean_y).powi(2)).sum::<f64>();
    if var_x == 0.0 || var_y == 0.0 {
        return Ok(0.0);
    }
    Ok(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Computes the pairwise (signed) Pearson correlation matrix of a dataset's
/// columns, unit diagonal included. Pairs involving a constant column
/// correlate at `0.0`; the diagonal stays `1.0` regardless.
pub fn correlation_matrix(data: &Array2<f64>) -> Array2<f64> {
    let cols = data.ncols();
    let mut matrix = Array2::<f64>::zeros((cols, cols));
    let columns: Vec<Vec<f64>> = data
        .axis_iter(Axis(1))
        .map(|column| column.to_vec())
        .collect();
    for i in 0..cols {
        matrix[[i, i]] = 1.0;
        for j in (i + 1)..cols {
            let r = pearson(&columns[i], &columns[j]).unwrap_or(0.0);
            matrix[[i, j]] = r;
            matrix[[j, i]] = r;
        }
    }
    matrix
}

/// Computes the share of total variance each column explains, as
/// percentages sorted in descending order (the usual input to a cumulative
/// variance plot). Sample variance (`n - 1` divisor) per column; a dataset
/// with zero total variance yields all zeros.
pub fn explained_variance(data: &Array2<f64>) -> Vec<f64> {
    let variances: Vec<f64> = data
        .axis_iter(Axis(1))
        .map(|column| sample_variance(column))
        .collect();
    let total: f64 = variances.iter().sum();
    let mut shares: Vec<f64> = if total == 0.0 {
        vec![0.0; variances.len()]
    } else {
        variances.iter().map(|v| v / total * 100.0).collect()
    };
    shares.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    shares
}

/// Running sum over a slice, e.g. to turn sorted explained-variance shares
/// into a cumulative curve.
pub fn cumulative(values: &[f64]) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            acc += v;
            acc
        })
        .collect()
}

fn sample_variance(column: ArrayView1<f64>) -> f64 {
    let n = column.len();
    if n < 2 {
        return 0.0;
    }
    let mean = column.sum() / n as f64;
    column.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n as f64 - 1.0)
}
