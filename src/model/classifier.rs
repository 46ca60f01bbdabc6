//! Inference: log-space joint probability maximization.

use std::cmp::Ordering;
use std::sync::Arc;

use super::Model;
use super::label::{Label, PerLabel};
use super::store::ModelStore;
use crate::analysis::{SentimentAnalyzer, tokenize};
use crate::error::{Result, SentimentError};

impl Model {
    /// Fail with `ModelNotTrained` unless every label frequency is a
    /// positive finite number.
    pub fn ensure_trained(&self) -> Result<()> {
        for (label, &frequency) in self.label_frequency.iter() {
            if !(frequency.is_finite() && frequency > 0.0) {
                return Err(SentimentError::model_not_trained(format!(
                    "label frequency for {label} is {frequency}"
                )));
            }
        }
        Ok(())
    }

    /// Likelihood used for tokens absent from the vocabulary:
    /// `1 / label_frequency` per label.
    pub fn unseen_likelihood(&self) -> PerLabel<f64> {
        self.label_frequency.map(|frequency| 1.0 / frequency)
    }

    /// Sum of log-likelihoods of `tokens` plus the log-prior, per label.
    pub fn joint_log_probabilities<S: AsRef<str>>(&self, tokens: &[S]) -> Result<PerLabel<f64>> {
        self.ensure_trained()?;

        let unseen = self.unseen_likelihood();
        let mut joint = PerLabel::<f64>::default();

        for token in tokens {
            let likelihood = self.likelihood(token.as_ref()).unwrap_or(&unseen);
            add_logs(&mut joint, likelihood);
        }
        add_logs(&mut joint, &self.priors);

        Ok(joint)
    }

    /// Classify already tokenized text.
    pub fn classify_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Label> {
        let joint = self.joint_log_probabilities(tokens)?;
        Ok(arg_max(&joint))
    }

    /// Tokenize and classify a sentence.
    pub fn classify(&self, sentence: &str) -> Result<Label> {
        self.classify_tokens(&tokenize(sentence))
    }
}

/// Classify `sentence` with `model`.
pub fn classify(sentence: &str, model: &Model) -> Result<Label> {
    model.classify(sentence)
}

fn add_logs(accumulator: &mut PerLabel<f64>, values: &PerLabel<f64>) {
    for label in Label::ALL {
        accumulator[label] += values[label].ln();
    }
}

/// Label with the highest score; ties go to the lowest index.
fn arg_max(scores: &PerLabel<f64>) -> Label {
    let mut best = Label::Positive;
    for label in Label::ALL {
        if scores[label].total_cmp(&scores[best]) == Ordering::Greater {
            best = label;
        }
    }
    best
}

/// Sentiment classifier trait.
///
/// Implementations turn raw text into one of the three labels. Both the
/// evaluator and the HTTP service work against this trait.
pub trait SentimentClassifier: Send + Sync {
    /// The analyzer turning text into the tokens this classifier expects.
    fn analyzer(&self) -> &SentimentAnalyzer;

    /// Predict the label for already analyzed tokens.
    fn predict_tokens(&self, tokens: &[String]) -> Result<Label>;

    /// Predict the label for a given text.
    fn predict(&self, text: &str) -> Result<Label> {
        self.predict_tokens(&self.analyzer().tokenize(text))
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// Naive Bayes classifier reading the current snapshot of a [`ModelStore`].
///
/// Each prediction takes one snapshot, so a concurrent reload never mixes
/// parameters from two models within a single classification.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    store: Arc<ModelStore>,
    analyzer: SentimentAnalyzer,
}

impl NaiveBayesClassifier {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self::with_analyzer(store, SentimentAnalyzer::new())
    }

    pub fn with_analyzer(store: Arc<ModelStore>, analyzer: SentimentAnalyzer) -> Self {
        NaiveBayesClassifier { store, analyzer }
    }

    /// Shortcut for a classifier over a fixed model.
    pub fn from_model(model: Model) -> Self {
        Self::new(Arc::new(ModelStore::with_model(model)))
    }

    pub fn store(&self) -> &Arc<ModelStore> {
        &self.store
    }
}

impl SentimentClassifier for NaiveBayesClassifier {
    fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    fn predict_tokens(&self, tokens: &[String]) -> Result<Label> {
        let model = self.store.snapshot()?;
        model.classify_tokens(tokens)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
