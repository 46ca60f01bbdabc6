//! # sentiment-bayes
//!
//! Three-class sentiment classification (positive, neutral, negative) with a
//! multinomial Naive Bayes model and Laplace smoothing.
//!
//! ## Features
//!
//! - Semicolon/whitespace tokenizer with ASCII letter normalization
//! - Training from labeled CSV files with accuracy reporting
//! - Human-diffable JSON params blob with exact float round-trip
//! - Log-space classification over an atomically swappable model snapshot
//! - HTTP inference endpoint

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod server;

pub mod prelude {
    pub use crate::analysis::tokenize;
    pub use crate::error::{ErrorKind, Result, SentimentError};
    pub use crate::model::{
        Label, Model, ModelStore, NaiveBayesClassifier, SentimentClassifier, TrainingExample,
        classify, fit, load_params, write_params,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
