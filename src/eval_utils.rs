// eval_utils.rs

use log::debug;
use ndarray::Array2;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// The closed error taxonomy of the evaluation engine. Only the fail-fast
/// surface (label set construction, confusion matrix construction, report
/// generation) ever returns these; the metric functions report bad input
/// through [`Metric::Undefined`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("truth and prediction must have the same shape (truth: {truth}, prediction: {prediction})")]
    ShapeMismatch { truth: usize, prediction: usize },
    #[error("truth and prediction must not be empty")]
    EmptyInput,
    #[error("invalid label: {0}")]
    InvalidLabel(String),
}

/// Checks the shared preconditions on a (truth, prediction) pair: equal
/// length first, then non-emptiness. Every computation in this module runs
/// behind this check; whether a failure is fatal or soft depends on the
/// caller (see [`ConfusionMatrix::build`] vs [`accuracy_score`]).
pub fn validate_pair<L>(truth: &[L], prediction: &[L]) -> Result<(), EvalError> {
    if truth.len() != prediction.len() {
        return Err(EvalError::ShapeMismatch {
            truth: truth.len(),
            prediction: prediction.len(),
        });
    }
    if truth.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    Ok(())
}

/// An explicit, ordered set of unique class labels. The label set is supplied
/// by the caller, never inferred from the data, and controls the row/ column
/// order of every confusion matrix and metrics report built from it. It also
/// acts as a filter: observations carrying a label outside the set do not
/// contribute to the matrix.
///
/// ```
/// use knightml::eval_utils::LabelSet;
///
/// let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
/// assert_eq!(labels.index_of(&"Sith"), Some(1));
///
/// // Duplicates are rejected at construction
/// assert!(LabelSet::new(vec!["Jedi", "Jedi"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSet<L> {
    labels: Vec<L>,
}

impl<L> LabelSet<L> {
    /// Builds a label set from an ordered list of labels. Returns
    /// `EvalError::EmptyInput` for an empty list and
    /// `EvalError::InvalidLabel` when the same label appears twice.
    pub fn new(labels: Vec<L>) -> Result<Self, EvalError>
    where
        L: Eq + Hash + Debug,
    {
        if labels.is_empty() {
            return Err(EvalError::EmptyInput);
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label) {
                return Err(EvalError::InvalidLabel(format!(
                    "duplicate label {:?} in label set",
                    label
                )));
            }
        }
        Ok(LabelSet { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels in axis order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// The row/ column index a label maps to, or `None` for a label outside
    /// the set.
    pub fn index_of(&self, label: &L) -> Option<usize>
    where
        L: PartialEq,
    {
        self.labels.iter().position(|l| l == label)
    }
}

/// A square, label-indexed count matrix. Entry `(i, j)` counts the
/// observations whose true label is `labels[i]` and whose predicted label is
/// `labels[j]`: the diagonal holds correct classifications, everything off
/// the diagonal is a misclassification from row-label to column-label.
///
/// ```
/// use knightml::eval_utils::{ConfusionMatrix, LabelSet};
///
/// let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
/// let truth = ["Jedi", "Jedi", "Sith", "Sith"];
/// let prediction = ["Jedi", "Sith", "Sith", "Sith"];
///
/// let cm = ConfusionMatrix::build(&truth, &prediction, &labels).unwrap();
/// assert_eq!(cm.get(0, 0), Some(1)); // Jedi classified as Jedi
/// assert_eq!(cm.get(0, 1), Some(1)); // Jedi classified as Sith
/// assert_eq!(cm.get(1, 1), Some(2)); // Sith classified as Sith
/// assert_eq!(cm.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<L> {
    labels: Vec<L>,
    counts: Array2<u64>,
}

impl<L> ConfusionMatrix<L> {
    /// Builds the matrix in a single pass over the observations, tallying
    /// `(truth index, prediction index)` pairs through a label-to-index map
    /// and projecting them onto the label set order.
    ///
    /// This operation is fail-fast: a shape mismatch or empty input is a
    /// usage error and aborts with an [`EvalError`] rather than producing a
    /// partial matrix. Observations whose true or predicted label is not in
    /// the label set are silently excluded; they contribute to neither a row
    /// nor a column.
    pub fn build(truth: &[L], prediction: &[L], labels: &LabelSet<L>) -> Result<Self, EvalError>
    where
        L: Eq + Hash + Clone,
    {
        validate_pair(truth, prediction)?;

        let index: HashMap<&L, usize> = labels
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| (label, i))
            .collect();

        let mut counts = Array2::<u64>::zeros((labels.len(), labels.len()));
        let mut excluded = 0usize;
        for (t, p) in truth.iter().zip(prediction.iter()) {
            match (index.get(t), index.get(p)) {
                (Some(&i), Some(&j)) => counts[[i, j]] += 1,
                _ => excluded += 1,
            }
        }
        if excluded > 0 {
            debug!(
                "confusion matrix: excluded {} of {} observations outside the label set",
                excluded,
                truth.len()
            );
        }

        Ok(ConfusionMatrix {
            labels: labels.labels().to_vec(),
            counts,
        })
    }

    /// The raw count matrix, rows indexed by true label, columns by
    /// predicted label, both in label set order.
    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// The count at `(row, col)`, or `None` when either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.counts.get([row, col]).copied()
    }

    /// The labels indexing the matrix axes.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of classes (the matrix is `size x size`).
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Total observations captured by the matrix. This equals the input
    /// length only when every observation's truth and prediction both lie in
    /// the label set.
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Assembles the matrix into a labeled tabular structure for an external
    /// renderer (e.g. a heatmap surface). No rendering happens here.
    pub fn to_table(&self) -> ConfusionTable<L>
    where
        L: Clone,
    {
        ConfusionTable {
            labels: self.labels.clone(),
            rows: self.counts.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

/// A confusion matrix flattened to labeled rows, ready for serialization
/// towards a tabular renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfusionTable<L> {
    pub labels: Vec<L>,
    pub rows: Vec<Vec<u64>>,
}

/// The result of a metric computation: either a value in `[0.0, 1.0]` or
/// `Undefined` when the metric has no mathematical meaning for the given
/// inputs (e.g. recall over a class with zero actual positives). Carrying the
/// distinction in a tagged type lets callers tell a computed zero apart from
/// "not computable" without comparing against sentinel values.
///
/// Serializes as a plain JSON number, or `null` for `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Undefined,
}

impl Metric {
    /// The inner value, or `None` for `Undefined`.
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(*v),
            Metric::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Metric::Undefined)
    }
}

impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Metric::Value(v) => serializer.serialize_f64(*v),
            Metric::Undefined => serializer.serialize_none(),
        }
    }
}

/// Computes the accuracy score: the share of observations whose predicted
/// label matches the true label. Accuracy is global, there is no notion of a
/// positive class.
///
/// Fail-soft: shape mismatch or empty input yields [`Metric::Undefined`]
/// rather than an error, so metric pipelines need no per-call error
/// handling.
///
/// ```
/// use knightml::eval_utils::{accuracy_score, Metric};
///
/// let truth = ["Jedi", "Jedi", "Sith", "Sith"];
/// let prediction = ["Jedi", "Sith", "Sith", "Sith"];
/// assert_eq!(accuracy_score(&truth, &prediction), Metric::Value(0.75));
/// ```
pub fn accuracy_score<L: PartialEq>(y: &[L], y_hat: &[L]) -> Metric {
    if validate_pair(y, y_hat).is_err() {
        return Metric::Undefined;
    }
    let matches = y.iter().zip(y_hat.iter()).filter(|(t, p)| t == p).count();
    Metric::Value(matches as f64 / y.len() as f64)
}

/// Computes the precision score for `pos_label`: of everything predicted as
/// the positive class, the share that really belongs to it. Use precision to
/// control for false positives.
///
/// When the positive class was predicted zero times the score is defined as
/// `Value(0.0)`, not `Undefined`. Shape mismatch or empty input yields
/// [`Metric::Undefined`].
pub fn precision_score<L: PartialEq>(y: &[L], y_hat: &[L], pos_label: &L) -> Metric {
    if validate_pair(y, y_hat).is_err() {
        return Metric::Undefined;
    }
    let tp = count_pairs(y, y_hat, |t, p| t == pos_label && p == pos_label);
    let fp = count_pairs(y, y_hat, |t, p| t != pos_label && p == pos_label);
    if tp + fp == 0 {
        return Metric::Value(0.0);
    }
    Metric::Value(tp as f64 / (tp + fp) as f64)
}

/// Computes the recall score for `pos_label`: of everything that really
/// belongs to the positive class, the share the model recognized. Use recall
/// to control for false negatives.
///
/// When zero actual positives exist the score is [`Metric::Undefined`], not
/// `Value(0.0)`. Note the contrast with [`precision_score`]'s
/// zero-denominator result; the two policies differ and callers relying on
/// one should not assume the other. Shape mismatch or empty input also
/// yields `Undefined`.
pub fn recall_score<L: PartialEq>(y: &[L], y_hat: &[L], pos_label: &L) -> Metric {
    if validate_pair(y, y_hat).is_err() {
        return Metric::Undefined;
    }
    let tp = count_pairs(y, y_hat, |t, p| t == pos_label && p == pos_label);
    let fn_ = count_pairs(y, y_hat, |t, p| t == pos_label && p != pos_label);
    if tp + fn_ == 0 {
        return Metric::Undefined;
    }
    Metric::Value(tp as f64 / (tp + fn_) as f64)
}

/// Computes the F1 score for `pos_label`, the harmonic mean of precision and
/// recall. Use F1 when both false positives and false negatives matter.
///
/// Composition rules: if either precision or recall is `Undefined`, or their
/// sum is zero, the F1 score is `Value(0.0)`. Shape mismatch or empty input
/// yields [`Metric::Undefined`].
pub fn f1_score<L: PartialEq>(y: &[L], y_hat: &[L], pos_label: &L) -> Metric {
    if validate_pair(y, y_hat).is_err() {
        return Metric::Undefined;
    }
    let precision = precision_score(y, y_hat, pos_label);
    let recall = recall_score(y, y_hat, pos_label);
    match (precision.value(), recall.value()) {
        (Some(p), Some(r)) => {
            if p + r == 0.0 {
                Metric::Value(0.0)
            } else {
                Metric::Value(2.0 * p * r / (p + r))
            }
        }
        _ => Metric::Value(0.0),
    }
}

fn count_pairs<L, F>(y: &[L], y_hat: &[L], predicate: F) -> usize
where
    F: Fn(&L, &L) -> bool,
{
    y.iter()
        .zip(y_hat.iter())
        .filter(|(t, p)| predicate(t, p))
        .count()
}

/// One row of a [`MetricsReport`]: the scores obtained with `label` as the
/// positive class, plus its support (count of ground-truth observations in
/// the class).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport<L> {
    pub label: L,
    pub precision: Metric,
    pub recall: Metric,
    pub f1: Metric,
    pub support: usize,
}

/// Per-class precision/ recall/ F1/ support for every label of a label set,
/// plus the global accuracy and total observation count. Built once per
/// evaluation run and immutable afterwards; rendering and persistence are an
/// external consumer's business.
///
/// ```
/// use knightml::eval_utils::{LabelSet, MetricsReport};
///
/// let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
/// let truth = ["Jedi", "Jedi", "Sith", "Sith"];
/// let prediction = ["Jedi", "Sith", "Sith", "Sith"];
///
/// let report = MetricsReport::generate(&truth, &prediction, &labels).unwrap();
/// assert_eq!(report.total, 4);
/// assert_eq!(report.classes[0].support, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport<L> {
    pub classes: Vec<ClassReport<L>>,
    pub accuracy: Metric,
    pub total: usize,
}

impl<L> MetricsReport<L> {
    /// Assembles the report for every label of `labels` taken as the
    /// positive class in turn.
    ///
    /// The entry point itself is fail-fast (a report is never built from
    /// mismatched or empty sequences), but the metric cells inside a valid
    /// report keep their fail-soft semantics: a class with zero actual
    /// positives carries `Undefined` recall.
    pub fn generate(truth: &[L], prediction: &[L], labels: &LabelSet<L>) -> Result<Self, EvalError>
    where
        L: PartialEq + Clone,
    {
        validate_pair(truth, prediction)?;
        let classes = labels
            .labels()
            .iter()
            .map(|label| ClassReport {
                label: label.clone(),
                precision: precision_score(truth, prediction, label),
                recall: recall_score(truth, prediction, label),
                f1: f1_score(truth, prediction, label),
                support: truth.iter().filter(|t| *t == label).count(),
            })
            .collect();
        debug!(
            "metrics report assembled: {} classes over {} observations",
            labels.len(),
            truth.len()
        );
        Ok(MetricsReport {
            classes,
            accuracy: accuracy_score(truth, prediction),
            total: truth.len(),
        })
    }

    /// The report as a `serde_json::Value`, convenient for handing to a
    /// renderer or API layer. Undefined metrics serialize as `null`.
    pub fn to_json(&self) -> Value
    where
        L: Serialize,
    {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_metric_eq(metric: Metric, expected: f64) {
        match metric.value() {
            Some(v) => assert!(
                (v - expected).abs() < EPS,
                "expected {}, got {}",
                expected,
                v
            ),
            None => panic!("expected {}, got Undefined", expected),
        }
    }

    fn jedi_sith() -> (Vec<&'static str>, Vec<&'static str>, LabelSet<&'static str>) {
        let truth = vec!["Jedi", "Jedi", "Sith", "Sith"];
        let prediction = vec!["Jedi", "Sith", "Sith", "Sith"];
        let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
        (truth, prediction, labels)
    }

    #[test]
    fn validate_pair_checks_shape_before_emptiness() {
        let a = ["Jedi"];
        let empty: [&str; 0] = [];
        assert_eq!(
            validate_pair(&a, &empty),
            Err(EvalError::ShapeMismatch {
                truth: 1,
                prediction: 0
            })
        );
        assert_eq!(validate_pair(&empty, &empty), Err(EvalError::EmptyInput));
        assert_eq!(validate_pair(&a, &a), Ok(()));
    }

    #[test]
    fn label_set_rejects_duplicates_and_empty() {
        assert!(matches!(
            LabelSet::new(vec!["Jedi", "Sith", "Jedi"]),
            Err(EvalError::InvalidLabel(_))
        ));
        assert_eq!(
            LabelSet::<&str>::new(Vec::new()),
            Err(EvalError::EmptyInput)
        );
    }

    #[test]
    fn label_set_preserves_caller_order() {
        let labels = LabelSet::new(vec!["Sith", "Jedi"]).unwrap();
        assert_eq!(labels.labels(), &["Sith", "Jedi"]);
        assert_eq!(labels.index_of(&"Jedi"), Some(1));
        assert_eq!(labels.index_of(&"Droid"), None);
    }

    #[test]
    fn confusion_matrix_jedi_sith_scenario() {
        let (truth, prediction, labels) = jedi_sith();
        let cm = ConfusionMatrix::build(&truth, &prediction, &labels).unwrap();
        assert_eq!(cm.get(0, 0), Some(1));
        assert_eq!(cm.get(0, 1), Some(1));
        assert_eq!(cm.get(1, 0), Some(0));
        assert_eq!(cm.get(1, 1), Some(2));
        assert_eq!(cm.total(), 4);
        assert_eq!(cm.size(), 2);
    }

    #[test]
    fn confusion_matrix_excludes_labels_outside_the_set() {
        let truth = ["Jedi", "Droid", "Sith", "Jedi"];
        let prediction = ["Jedi", "Jedi", "Droid", "Jedi"];
        let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
        let cm = ConfusionMatrix::build(&truth, &prediction, &labels).unwrap();
        // Rows 2 and 3 touch "Droid" on either side and vanish entirely
        assert_eq!(cm.total(), 2);
        assert_eq!(cm.get(0, 0), Some(2));
        assert_eq!(cm.get(1, 0), Some(0));
        assert_eq!(cm.get(1, 1), Some(0));
    }

    #[test]
    fn confusion_matrix_is_fail_fast() {
        let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
        let empty: [&str; 0] = [];
        assert_eq!(
            ConfusionMatrix::build(&empty, &empty, &labels),
            Err(EvalError::EmptyInput)
        );
        let truth = ["Jedi", "Sith"];
        let prediction = ["Jedi"];
        assert_eq!(
            ConfusionMatrix::build(&truth, &prediction, &labels),
            Err(EvalError::ShapeMismatch {
                truth: 2,
                prediction: 1
            })
        );
    }

    #[test]
    fn accuracy_on_perfect_self_match_is_one() {
        let y = ["Jedi", "Sith", "Jedi"];
        assert_metric_eq(accuracy_score(&y, &y), 1.0);
    }

    #[test]
    fn accuracy_jedi_sith_scenario() {
        let (truth, prediction, _) = jedi_sith();
        assert_metric_eq(accuracy_score(&truth, &prediction), 0.75);
    }

    #[test]
    fn metrics_are_soft_on_invalid_input() {
        let empty: [&str; 0] = [];
        let truth = ["Jedi", "Sith"];
        let prediction = ["Jedi"];
        assert!(accuracy_score(&empty, &empty).is_undefined());
        assert!(accuracy_score(&truth, &prediction).is_undefined());
        assert!(precision_score(&empty, &empty, &"Jedi").is_undefined());
        assert!(precision_score(&truth, &prediction, &"Jedi").is_undefined());
        assert!(recall_score(&empty, &empty, &"Jedi").is_undefined());
        assert!(recall_score(&truth, &prediction, &"Jedi").is_undefined());
        assert!(f1_score(&empty, &empty, &"Jedi").is_undefined());
        assert!(f1_score(&truth, &prediction, &"Jedi").is_undefined());
    }

    #[test]
    fn precision_recall_f1_jedi_sith_scenario() {
        let (truth, prediction, _) = jedi_sith();
        assert_metric_eq(precision_score(&truth, &prediction, &"Jedi"), 1.0);
        assert_metric_eq(recall_score(&truth, &prediction, &"Jedi"), 0.5);
        let f1 = f1_score(&truth, &prediction, &"Jedi").value().unwrap();
        assert!((f1 - 0.666_666_666).abs() < 1e-3);
        let p_sith = precision_score(&truth, &prediction, &"Sith").value().unwrap();
        assert!((p_sith - 0.666_666_666).abs() < 1e-3);
        assert_metric_eq(recall_score(&truth, &prediction, &"Sith"), 1.0);
    }

    #[test]
    fn singleton_perfect_prediction() {
        let y = ["A"];
        assert_metric_eq(precision_score(&y, &y, &"A"), 1.0);
        assert_metric_eq(recall_score(&y, &y, &"A"), 1.0);
        assert_metric_eq(f1_score(&y, &y, &"A"), 1.0);
    }

    #[test]
    fn zero_predicted_positives_is_zero_precision() {
        let truth = ["Jedi", "Sith", "Jedi"];
        let prediction = ["Sith", "Sith", "Sith"];
        assert_metric_eq(precision_score(&truth, &prediction, &"Jedi"), 0.0);
    }

    #[test]
    fn zero_actual_positives_is_undefined_recall() {
        let truth = ["Sith", "Sith", "Sith"];
        let prediction = ["Jedi", "Sith", "Sith"];
        assert!(recall_score(&truth, &prediction, &"Jedi").is_undefined());
        // while precision for the same class stays defined
        assert_metric_eq(precision_score(&truth, &prediction, &"Jedi"), 0.0);
    }

    #[test]
    fn f1_folds_undefined_recall_to_zero() {
        // "Jedi" never occurs in truth: recall undefined, precision 0.0
        let truth = ["Sith", "Sith"];
        let prediction = ["Sith", "Sith"];
        assert_metric_eq(f1_score(&truth, &prediction, &"Jedi"), 0.0);
    }

    #[test]
    fn f1_is_zero_when_precision_and_recall_are_zero() {
        // "Jedi" exists in truth but is never predicted, and nothing
        // predicted as "Jedi" is right: both scores bottom out
        let truth = ["Jedi", "Sith"];
        let prediction = ["Sith", "Sith"];
        assert_metric_eq(precision_score(&truth, &prediction, &"Jedi"), 0.0);
        assert_metric_eq(recall_score(&truth, &prediction, &"Jedi"), 0.0);
        assert_metric_eq(f1_score(&truth, &prediction, &"Jedi"), 0.0);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let truth = ["a", "b", "a", "c", "b", "a"];
        let prediction = ["b", "b", "a", "a", "c", "a"];
        for label in ["a", "b", "c"] {
            for metric in [
                precision_score(&truth, &prediction, &label),
                recall_score(&truth, &prediction, &label),
                f1_score(&truth, &prediction, &label),
            ] {
                if let Some(v) = metric.value() {
                    assert!((0.0..=1.0).contains(&v), "{} out of range for {}", v, label);
                }
            }
        }
    }

    #[test]
    fn report_jedi_sith_scenario() {
        let (truth, prediction, labels) = jedi_sith();
        let report = MetricsReport::generate(&truth, &prediction, &labels).unwrap();
        assert_eq!(report.total, 4);
        assert_metric_eq(report.accuracy, 0.75);
        assert_eq!(report.classes.len(), 2);

        let jedi = &report.classes[0];
        assert_eq!(jedi.label, "Jedi");
        assert_eq!(jedi.support, 2);
        assert_metric_eq(jedi.precision, 1.0);
        assert_metric_eq(jedi.recall, 0.5);

        let sith = &report.classes[1];
        assert_eq!(sith.label, "Sith");
        assert_eq!(sith.support, 2);
        assert_metric_eq(sith.recall, 1.0);
    }

    #[test]
    fn report_is_fail_fast_on_invalid_input() {
        let labels = LabelSet::new(vec!["Jedi", "Sith"]).unwrap();
        let truth = ["Jedi"];
        let empty: [&str; 0] = [];
        assert!(matches!(
            MetricsReport::generate(&truth, &empty, &labels),
            Err(EvalError::ShapeMismatch { .. })
        ));
        assert_eq!(
            MetricsReport::generate(&empty, &empty, &labels),
            Err(EvalError::EmptyInput)
        );
    }

    #[test]
    fn confusion_table_carries_label_order() {
        let (truth, prediction, labels) = jedi_sith();
        let cm = ConfusionMatrix::build(&truth, &prediction, &labels).unwrap();
        let table = cm.to_table();
        assert_eq!(table.labels, vec!["Jedi", "Sith"]);
        assert_eq!(table.rows, vec![vec![1, 1], vec![0, 2]]);
    }

    #[test]
    fn undefined_metric_serializes_as_null() {
        let json = serde_json::to_value(Metric::Undefined).unwrap();
        assert!(json.is_null());
        let json = serde_json::to_value(Metric::Value(0.5)).unwrap();
        assert_eq!(json, serde_json::json!(0.5));
    }

    #[test]
    fn report_to_json_shape() {
        let (truth, prediction, labels) = jedi_sith();
        let report = MetricsReport::generate(&truth, &prediction, &labels).unwrap();
        let json = report.to_json();
        assert_eq!(json["total"], serde_json::json!(4));
        assert_eq!(json["classes"][0]["label"], serde_json::json!("Jedi"));
        assert_eq!(json["classes"][0]["precision"], serde_json::json!(1.0));
    }

    #[test]
    fn works_with_integer_labels() {
        let truth = [1, 0, 1, 1];
        let prediction = [1, 1, 1, 0];
        let labels = LabelSet::new(vec![0, 1]).unwrap();
        let cm = ConfusionMatrix::build(&truth, &prediction, &labels).unwrap();
        assert_eq!(cm.get(1, 1), Some(2));
        assert_metric_eq(accuracy_score(&truth, &prediction), 0.5);
    }
}
