//! Labeled CSV datasets.
//!
//! Each data row is `label,field,field,...` after a header row:
//!
//! ```csv
//! label,text
//! positive,great,food
//! negative,cold food; rude staff
//! ```
//!
//! Fields are read untrimmed. Every field after the label is tokenized on
//! its own and the token lists are concatenated, so an empty field or a
//! leading space contributes an empty token just as it would in one
//! sentence.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, warn};

use crate::analysis::SentimentAnalyzer;
use crate::error::Result;
use crate::model::{Label, TrainingExample};

/// One data row of a labeled CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    /// The raw label field.
    pub label: String,
    /// Remaining fields, verbatim.
    pub fields: Vec<String>,
}

impl LabeledRow {
    pub fn new<L, I, S>(label: L, fields: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LabeledRow {
            label: label.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The recognized label, matched exactly.
    pub fn label(&self) -> Option<Label> {
        Label::parse(&self.label)
    }

    /// Tokens of every field, in field order.
    pub fn tokens(&self, analyzer: &SentimentAnalyzer) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|field| analyzer.tokenize(field))
            .collect()
    }
}

/// Tokenized training examples plus the data-quality diagnostic.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    pub examples: Vec<TrainingExample>,
    /// Rows whose label was none of the three known labels.
    pub unlabeled_rows: usize,
}

/// Read a labeled CSV file, skipping its header row.
pub fn read_labeled_csv<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Vec<LabeledRow>> {
    let path = path.as_ref();
    debug!("reading dataset {}", path.display());
    let file = File::open(path)?;
    read_labeled(file, delimiter)
}

/// Read labeled rows from any reader, skipping the header row.
pub fn read_labeled<R: Read>(input: R, delimiter: u8) -> Result<Vec<LabeledRow>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();
        let Some(label) = fields.next() else {
            continue;
        };
        rows.push(LabeledRow::new(label, fields));
    }
    Ok(rows)
}

/// Tokenize rows into training examples.
///
/// Rows with unrecognized labels are kept as examples without a class and
/// counted in [`TrainingSet::unlabeled_rows`].
pub fn to_training_set(rows: &[LabeledRow], analyzer: &SentimentAnalyzer) -> TrainingSet {
    let mut set = TrainingSet::default();

    for (line, row) in rows.iter().enumerate() {
        let label = row.label();
        if label.is_none() {
            set.unlabeled_rows += 1;
            debug!("row {}: unrecognized label {:?}", line + 1, row.label);
        }
        set.examples.push(TrainingExample {
            label,
            tokens: row.tokens(analyzer),
        });
    }

    if set.unlabeled_rows > 0 {
        warn!(
            "{} of {} rows have a label other than positive/neutral/negative",
            set.unlabeled_rows,
            rows.len()
        );
    }
    set
}
