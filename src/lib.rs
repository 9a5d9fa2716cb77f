// lib.rs
//! # KNIGHTML
//!
//! Data Science & Machine Learning evaluation utilities for classification
//! pipelines: confusion matrices and classification metrics (ACCURACY/
//! PRECISION/ RECALL/ F1) with explicit undefined-value semantics, plus the
//! dataset scaling, correlation, variance and train/ validation split helpers
//! that usually surround them. 🚀💪
//!
//! The crate computes numbers; it deliberately does not load data, talk to
//! databases, render charts or cluster anything. Feed it label sequences from
//! whatever loader you like, hand its serializable output to whatever
//! renderer you like.
//!
//! ## `eval_utils`
//!
//! - **Purpose**: The core classification evaluation engine.
//! - **Features**:
//!   - **LabelSet**: An explicit, caller-supplied, validated label ordering that drives matrix axis order and filters out-of-set observations.
//!   - **ConfusionMatrix**: A square, label-indexed count matrix built in a single pass, with a fail-fast contract on malformed input and a `ConfusionTable` presenter for external renderers.
//!   - **Metric functions**: `accuracy_score`, `precision_score`, `recall_score` and `f1_score`, all fail-soft: malformed input yields an explicit `Metric::Undefined` instead of an error, so metric pipelines compose without per-call error handling.
//!   - **Asymmetric zero-denominator policy**: zero predicted positives is `0.0` precision, zero actual positives is `Undefined` recall, and F1 folds an undefined side to `0.0`.
//!   - **MetricsReport**: Per-class precision/ recall/ F1/ support plus global accuracy and total count, serializable via serde/ `to_json`.
//!
//! ## `scaling_utils`
//!
//! - **Purpose**: Column-wise feature scaling for numeric datasets.
//! - **Features**:
//!   - Min-max normalization onto `[0, 1]`.
//!   - Z-score standardization with the sample (`n - 1`) deviation.
//!   - Constant columns scale to `0.0` instead of propagating NaN.
//!
//! ## `stats_utils`
//!
//! - **Purpose**: Descriptive statistics for feature selection.
//! - **Features**:
//!   - Absolute Pearson correlation of a feature against a target.
//!   - Pairwise correlation matrix with unit diagonal.
//!   - Explained variance percentages and their cumulative curve.
//!
//! ## `split_utils`
//!
//! - **Purpose**: Shuffled train/ validation dataset splitting.
//! - **Features**:
//!   - Fraction-validated shuffle-and-cut split.
//!   - Seeded deterministic variant for reproducible experiments.
//!
//! ## License
//!
//! This project is licensed under the MIT License - see the LICENSE file for details.

pub mod eval_utils;
pub mod scaling_utils;
pub mod split_utils;
pub mod stats_utils;
