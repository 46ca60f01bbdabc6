//! Accuracy of a classifier on a held-out labeled set.

use log::info;
use serde::Serialize;

use crate::dataset::LabeledRow;
use crate::error::{Result, SentimentError};
use crate::model::{Label, PerLabel, SentimentClassifier};

/// Hits and support for one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LabelScore {
    /// Rows whose expected label is this one.
    pub support: usize,
    /// Of those, rows predicted correctly.
    pub correct: usize,
}

/// Outcome of an evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    /// `correct / total`, in `[0, 1]`.
    pub accuracy: f64,
    /// Rows whose expected label was not recognized; always misses.
    pub unlabeled: usize,
    pub positive: LabelScore,
    pub neutral: LabelScore,
    pub negative: LabelScore,
}

impl EvaluationReport {
    /// Per-label scores in label order.
    pub fn per_label(&self) -> PerLabel<LabelScore> {
        PerLabel::new(self.positive, self.neutral, self.negative)
    }
}

/// Classify every row and compare with its expected label.
pub fn evaluate<C>(classifier: &C, rows: &[LabeledRow]) -> Result<EvaluationReport>
where
    C: SentimentClassifier + ?Sized,
{
    if rows.is_empty() {
        return Err(SentimentError::invalid_input("test set is empty"));
    }

    let mut scores = PerLabel::<LabelScore>::default();
    let mut correct = 0;
    let mut unlabeled = 0;

    for row in rows {
        let predicted = classifier.predict_tokens(&row.tokens(classifier.analyzer()))?;
        match row.label() {
            Some(expected) => {
                scores[expected].support += 1;
                if predicted == expected {
                    scores[expected].correct += 1;
                    correct += 1;
                }
            }
            None => unlabeled += 1,
        }
    }

    let accuracy = correct as f64 / rows.len() as f64;
    info!(
        "{} evaluated {} rows: accuracy {accuracy:.4}",
        classifier.name(),
        rows.len()
    );

    Ok(EvaluationReport {
        total: rows.len(),
        correct,
        accuracy,
        unlabeled,
        positive: scores[Label::Positive],
        neutral: scores[Label::Neutral],
        negative: scores[Label::Negative],
    })
}
