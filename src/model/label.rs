//! Sentiment labels and label-indexed storage.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// One of the three sentiment classes.
///
/// The declaration order fixes the index of each label (`positive` = 0,
/// `neutral` = 1, `negative` = 2), which is also the order of every
/// three-element array in the params blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl Label {
    /// All labels in index order.
    pub const ALL: [Label; 3] = [Label::Positive, Label::Neutral, Label::Negative];

    /// The fixed index of this label.
    pub fn index(self) -> usize {
        match self {
            Label::Positive => 0,
            Label::Neutral => 1,
            Label::Negative => 2,
        }
    }

    /// The wire name of this label.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Neutral => "neutral",
            Label::Negative => "negative",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(value: &str) -> Option<Label> {
        match value {
            "positive" => Some(Label::Positive),
            "neutral" => Some(Label::Neutral),
            "negative" => Some(Label::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Label {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::parse(s).ok_or_else(|| SentimentError::invalid_input(format!("unknown label: {s:?}")))
    }
}

/// A value for each label, indexed by [`Label`] instead of a raw integer.
///
/// Iteration always follows [`Label::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerLabel<T>([T; 3]);

impl<T> PerLabel<T> {
    /// Create from explicit per-label values.
    pub fn new(positive: T, neutral: T, negative: T) -> Self {
        PerLabel([positive, neutral, negative])
    }

    /// Build by evaluating `f` for every label in index order.
    pub fn from_fn(mut f: impl FnMut(Label) -> T) -> Self {
        PerLabel(Label::ALL.map(&mut f))
    }

    /// Iterate `(label, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &T)> {
        Label::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate values in index order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Apply `f` to every value.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerLabel<U> {
        PerLabel::from_fn(|label| f(&self[label]))
    }

    /// Borrow the underlying array.
    pub fn as_array(&self) -> &[T; 3] {
        &self.0
    }

    /// Take the underlying array.
    pub fn into_array(self) -> [T; 3] {
        self.0
    }
}

impl PerLabel<u64> {
    /// Indicator vector for `label`; all zeros when there is no label.
    pub fn one_hot(label: Option<Label>) -> Self {
        PerLabel::from_fn(|l| u64::from(Some(l) == label))
    }
}

impl PerLabel<f64> {
    /// Sum of all three values.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T> From<[T; 3]> for PerLabel<T> {
    fn from(values: [T; 3]) -> Self {
        PerLabel(values)
    }
}

impl<T> Index<Label> for PerLabel<T> {
    type Output = T;

    fn index(&self, label: Label) -> &T {
        &self.0[label.index()]
    }
}

impl<T> IndexMut<Label> for PerLabel<T> {
    fn index_mut(&mut self, label: Label) -> &mut T {
        &mut self.0[label.index()]
    }
}
