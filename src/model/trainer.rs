//! Parameter estimation.

use std::collections::HashMap;

use log::{debug, info, warn};

use super::Model;
use super::label::{Label, PerLabel};
use crate::error::{Result, SentimentError};

/// One labeled, already tokenized sentence.
///
/// `label` is `None` when the source row carried a label string outside the
/// three known ones; such examples still count toward the vocabulary but
/// credit no class.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub label: Option<Label>,
    pub tokens: Vec<String>,
}

impl TrainingExample {
    pub fn new(label: Label, tokens: Vec<String>) -> Self {
        TrainingExample {
            label: Some(label),
            tokens,
        }
    }

    /// Build from a raw label string, matched exactly.
    pub fn from_raw(label: &str, tokens: Vec<String>) -> Self {
        TrainingExample {
            label: Label::parse(label),
            tokens,
        }
    }
}

/// Accumulates word counts over training examples.
///
/// Feed examples with [`Trainer::add_example`], then call
/// [`Trainer::finish`] to smooth and normalize into a [`Model`].
#[derive(Debug, Default)]
pub struct Trainer {
    word_stats: HashMap<String, PerLabel<u64>>,
    label_frequency: PerLabel<f64>,
    examples: usize,
    unlabeled_examples: usize,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one example.
    ///
    /// Every non-empty token gets the example's one-hot vector added to its
    /// counts. The label total grows by the full token count, empty tokens
    /// included.
    pub fn add_example(&mut self, example: &TrainingExample) {
        let one_hot = PerLabel::one_hot(example.label);

        for token in example.tokens.iter().filter(|token| !token.is_empty()) {
            let stats = self.word_stats.entry(token.clone()).or_default();
            for label in Label::ALL {
                stats[label] += one_hot[label];
            }
        }

        let token_count = example.tokens.len() as f64;
        for label in Label::ALL {
            self.label_frequency[label] += token_count * one_hot[label] as f64;
        }

        self.examples += 1;
        if example.label.is_none() {
            self.unlabeled_examples += 1;
        }
    }

    /// Number of examples counted so far.
    pub fn examples(&self) -> usize {
        self.examples
    }

    /// Number of examples whose label was not recognized.
    pub fn unlabeled_examples(&self) -> usize {
        self.unlabeled_examples
    }

    /// Number of distinct non-empty tokens counted so far.
    pub fn vocabulary_size(&self) -> usize {
        self.word_stats.len()
    }

    /// Smooth the counts and derive likelihoods and priors.
    pub fn finish(self) -> Result<Model> {
        if self.examples == 0 {
            return Err(SentimentError::invalid_input("training set is empty"));
        }
        if self.word_stats.is_empty() {
            return Err(SentimentError::invalid_input(
                "training set contains no non-empty tokens",
            ));
        }
        if self.unlabeled_examples > 0 {
            warn!(
                "{} of {} training examples had an unrecognized label and credit no class",
                self.unlabeled_examples, self.examples
            );
        }

        let Trainer {
            mut word_stats,
            mut label_frequency,
            examples,
            ..
        } = self;

        // Laplace smoothing: one extra occurrence of every token in every class.
        let distinct = word_stats.len() as f64;
        for stats in word_stats.values_mut() {
            for label in Label::ALL {
                stats[label] += 1;
            }
        }
        for label in Label::ALL {
            label_frequency[label] += distinct;
        }

        let word_likelihoods = word_stats
            .into_iter()
            .map(|(token, stats)| {
                let likelihood =
                    PerLabel::from_fn(|label| stats[label] as f64 / label_frequency[label]);
                (token, likelihood)
            })
            .collect::<HashMap<_, _>>();

        let total = label_frequency.total();
        let priors = label_frequency.map(|frequency| frequency / total);

        info!(
            "trained on {} examples: vocabulary {}, label frequencies {:?}",
            examples,
            word_likelihoods.len(),
            label_frequency.as_array()
        );
        debug!("priors {:?}", priors.as_array());

        Ok(Model::from_parts(word_likelihoods, label_frequency, priors))
    }
}

/// Train a model on a set of examples.
pub fn fit<'a, I>(examples: I) -> Result<Model>
where
    I: IntoIterator<Item = &'a TrainingExample>,
{
    let mut trainer = Trainer::new();
    for example in examples {
        trainer.add_example(example);
    }
    trainer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn example(label: &str, tokens: &[&str]) -> TrainingExample {
        TrainingExample::from_raw(label, tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_counts_smoothing_and_likelihoods() {
        let examples = vec![
            example("positive", &["good", "shop"]),
            example("negative", &["bad", "shop"]),
        ];
        let model = fit(&examples).unwrap();

        // raw totals [2, 0, 2] plus 3 distinct tokens
        assert_eq!(model.label_frequency().into_array(), [5.0, 3.0, 5.0]);

        // shop: raw [1, 0, 1] -> smoothed [2, 1, 2]
        let shop = model.likelihood("shop").unwrap();
        assert_eq!(shop.into_array(), [2.0 / 5.0, 1.0 / 3.0, 2.0 / 5.0]);

        let good = model.likelihood("good").unwrap();
        assert_eq!(good.into_array(), [2.0 / 5.0, 1.0 / 3.0, 1.0 / 5.0]);

        assert_eq!(model.priors().into_array(), [5.0 / 13.0, 3.0 / 13.0, 5.0 / 13.0]);
    }

    #[test]
    fn test_empty_tokens_excluded_from_vocabulary_but_counted_in_totals() {
        let examples = vec![example("neutral", &["average", "", "shop"])];
        let model = fit(&examples).unwrap();

        assert!(model.likelihood("").is_none());
        assert_eq!(model.vocabulary_size(), 2);
        // 3 tokens (one empty) + 2 distinct
        assert_eq!(model.label_frequency()[Label::Neutral], 5.0);
        assert_eq!(model.label_frequency()[Label::Positive], 2.0);
    }

    #[test]
    fn test_unrecognized_label_credits_no_class() {
        let mut trainer = Trainer::new();
        trainer.add_example(&example("positive", &["good"]));
        trainer.add_example(&example("Mixed", &["meh"]));
        assert_eq!(trainer.unlabeled_examples(), 1);
        assert_eq!(trainer.examples(), 2);
        assert_eq!(trainer.vocabulary_size(), 2);

        let model = trainer.finish().unwrap();
        // meh only carries the smoothing count
        let meh = model.likelihood("meh").unwrap();
        assert_eq!(meh.into_array(), [1.0 / 3.0, 1.0 / 2.0, 1.0 / 2.0]);
    }

    #[test]
    fn test_smoothing_keeps_every_likelihood_positive() {
        let examples = vec![
            example("positive", &["great", "food", "great"]),
            example("neutral", &["ok", "food"]),
            example("negative", &["awful", "service"]),
        ];
        let model = fit(&examples).unwrap();

        for likelihood in model.word_likelihoods().values() {
            assert!(likelihood.values().all(|&p| p > 0.0));
        }
        assert!((model.priors().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_training_set_is_invalid_input() {
        let err = fit(&Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_training_set_without_words_is_invalid_input() {
        let err = fit(&[example("positive", &["", ""])]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
