//! The params blob: JSON serialization of a trained [`Model`].
//!
//! ```json
//! {
//!   "priors": [0.5, 0.25, 0.25],
//!   "positiveLabelFrequency": 4.0,
//!   "neutralLabelFrequency": 2.0,
//!   "negativeLabelFrequency": 2.0,
//!   "wordsLikelihoods": { "good": [0.5, 0.5, 0.5] }
//! }
//! ```
//!
//! Every three-element array is ordered positive, neutral, negative. Numbers
//! are written in shortest round-trip form and parsed exactly, so a saved
//! model loads back bit-for-bit.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::Model;
use super::label::{Label, PerLabel};
use crate::error::{Result, SentimentError};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParamsBlob<'a> {
    priors: [f64; 3],
    positive_label_frequency: f64,
    neutral_label_frequency: f64,
    negative_label_frequency: f64,
    #[serde(borrow)]
    words_likelihoods: BTreeMap<Cow<'a, str>, [f64; 3]>,
}

/// Serialize a model into a params blob.
///
/// Tokens are written in sorted order so blobs from the same model diff
/// cleanly.
pub fn write_params(model: &Model) -> Result<String> {
    let frequency = model.label_frequency();
    let blob = ParamsBlob {
        priors: *model.priors().as_array(),
        positive_label_frequency: frequency[Label::Positive],
        neutral_label_frequency: frequency[Label::Neutral],
        negative_label_frequency: frequency[Label::Negative],
        words_likelihoods: model
            .word_likelihoods()
            .iter()
            .map(|(token, likelihood)| (Cow::Borrowed(token.as_str()), *likelihood.as_array()))
            .collect(),
    };

    serde_json::to_string(&blob)
        .map_err(|e| SentimentError::malformed_params(format!("cannot serialize model: {e}")))
}

/// Parse a params blob into a model.
///
/// Missing keys, wrong array lengths and negative values are rejected as
/// `MalformedParams`; nothing is defaulted.
pub fn load_params(blob: &str) -> Result<Model> {
    let blob: ParamsBlob<'_> = serde_json::from_str(blob)
        .map_err(|e| SentimentError::malformed_params(e.to_string()))?;

    check_non_negative("priors", &blob.priors)?;
    let label_frequency = PerLabel::new(
        blob.positive_label_frequency,
        blob.neutral_label_frequency,
        blob.negative_label_frequency,
    );
    check_non_negative("label frequencies", label_frequency.as_array())?;

    let mut word_likelihoods = HashMap::with_capacity(blob.words_likelihoods.len());
    for (token, likelihood) in blob.words_likelihoods {
        check_non_negative(&token, &likelihood)?;
        word_likelihoods.insert(token.into_owned(), PerLabel::from(likelihood));
    }

    Ok(Model::from_parts(
        word_likelihoods,
        label_frequency,
        PerLabel::from(blob.priors),
    ))
}

fn check_non_negative(what: &str, values: &[f64; 3]) -> Result<()> {
    if values.iter().all(|v| v.is_finite() && *v >= 0.0) {
        Ok(())
    } else {
        Err(SentimentError::malformed_params(format!(
            "{what:?} has invalid values {values:?}"
        )))
    }
}

/// Read and parse a params file.
pub fn load_params_file<P: AsRef<Path>>(path: P) -> Result<Model> {
    let content = fs::read_to_string(path.as_ref())?;
    load_params(&content)
}

/// Write a model to `path`, replacing any previous file in one step.
///
/// The blob goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never observe a half-written file.
pub fn save_params<P: AsRef<Path>>(model: &Model, path: P) -> Result<()> {
    let path = path.as_ref();
    let blob = write_params(model)?;

    let parent_dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(blob.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    info!(
        "wrote params for {} tokens to {}",
        model.vocabulary_size(),
        path.display()
    );
    Ok(())
}
