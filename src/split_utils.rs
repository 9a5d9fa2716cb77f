// split_utils.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    #[error("train_fraction must be strictly between 0 and 1 (got {0})")]
    FractionOutOfRange(f64),
    #[error("the dataset must contain at least two samples (got {0})")]
    TooFewSamples(usize),
    #[error("train_fraction {0} leaves the train or validation set empty")]
    DegenerateSplit(f64),
}

/// Splits a dataset into a shuffled (train, validation) pair, cutting at
/// `floor(len * train_fraction)`.
///
/// ```
/// use knightml::split_utils::split_seeded;
///
/// let rows: Vec<u32> = (0..100).collect();
/// let (train, validation) = split_seeded(&rows, 0.75, 42).unwrap();
/// assert_eq!(train.len(), 75);
/// assert_eq!(validation.len(), 25);
/// ```
pub fn split<T: Clone>(rows: &[T], train_fraction: f64) -> Result<(Vec<T>, Vec<T>), SplitError> {
    split_with(rows, train_fraction, &mut thread_rng())
}

/// Deterministic variant of [`split`] driven by a seeded RNG, for
/// reproducible experiments and tests.
pub fn split_seeded<T: Clone>(
    rows: &[T],
    train_fraction: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>), SplitError> {
    split_with(rows, train_fraction, &mut StdRng::seed_from_u64(seed))
}

fn split_with<T: Clone, R: Rng>(
    rows: &[T],
    train_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>), SplitError> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(SplitError::FractionOutOfRange(train_fraction));
    }
    if rows.len() < 2 {
        return Err(SplitError::TooFewSamples(rows.len()));
    }

    let cut = (rows.len() as f64 * train_fraction) as usize;
    if cut == 0 || cut == rows.len() {
        return Err(SplitError::DegenerateSplit(train_fraction));
    }

    let mut shuffled: Vec<T> = rows.to_vec();
    shuffled.shuffle(rng);
    let validation = shuffled.split_off(cut);
    Ok((shuffled, validation))
}
