//! Multinomial Naive Bayes sentiment model.
//!
//! This module is shared by the offline training pipeline and the online
//! inference service so both classify with exactly the same arithmetic.
//!
//! # Architecture
//!
//! - [`Label`] / [`PerLabel`]: the three classes and label-indexed vectors
//! - [`Trainer`] / [`fit`]: counting, Laplace smoothing, likelihoods, priors
//! - [`Model`]: immutable trained parameters; classification lives in
//!   [`classifier`]
//! - [`params`]: the JSON params blob
//! - [`ModelStore`]: an atomically swappable model snapshot
//!
//! # Example
//!
//! ```
//! use sentiment_bayes::analysis::tokenize;
//! use sentiment_bayes::model::{Label, TrainingExample, fit};
//!
//! # fn main() -> sentiment_bayes::error::Result<()> {
//! let examples = vec![TrainingExample::new(Label::Positive, tokenize("good shop"))];
//! let model = fit(&examples)?;
//!
//! assert_eq!(model.classify("Good shop")?, Label::Positive);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod label;
pub mod params;
pub mod store;
pub mod trainer;

use std::collections::HashMap;

pub use classifier::{NaiveBayesClassifier, SentimentClassifier, classify};
pub use label::{Label, PerLabel};
pub use params::{load_params, load_params_file, save_params, write_params};
pub use store::ModelStore;
pub use trainer::{Trainer, TrainingExample, fit};

/// Trained model parameters.
///
/// A model is never mutated after construction; retraining or reloading
/// produces a new value which [`ModelStore`] swaps in whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Per-token likelihood of each label.
    word_likelihoods: HashMap<String, PerLabel<f64>>,
    /// Total word occurrences credited to each label, after smoothing.
    label_frequency: PerLabel<f64>,
    /// Prior probability of each label.
    priors: PerLabel<f64>,
}

impl Model {
    pub(crate) fn from_parts(
        word_likelihoods: HashMap<String, PerLabel<f64>>,
        label_frequency: PerLabel<f64>,
        priors: PerLabel<f64>,
    ) -> Self {
        Model {
            word_likelihoods,
            label_frequency,
            priors,
        }
    }

    /// Likelihood vector for a token, if the token was seen in training.
    pub fn likelihood(&self, token: &str) -> Option<&PerLabel<f64>> {
        self.word_likelihoods.get(token)
    }

    /// All known tokens and their likelihood vectors.
    pub fn word_likelihoods(&self) -> &HashMap<String, PerLabel<f64>> {
        &self.word_likelihoods
    }

    /// Smoothed word-occurrence totals per label.
    pub fn label_frequency(&self) -> &PerLabel<f64> {
        &self.label_frequency
    }

    /// Prior probability per label.
    pub fn priors(&self) -> &PerLabel<f64> {
        &self.priors
    }

    /// Number of distinct tokens the model knows.
    pub fn vocabulary_size(&self) -> usize {
        self.word_likelihoods.len()
    }
}
