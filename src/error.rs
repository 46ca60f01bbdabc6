//! Error types for the sentiment classifier.
//!
//! Every fallible operation in this crate returns [`SentimentError`]. The
//! variants collapse into four [`ErrorKind`]s which callers use to decide
//! how to surface a failure (CLI exit message, HTTP status code).
//!
//! # Examples
//!
//! ```
//! use sentiment_bayes::error::{ErrorKind, Result, SentimentError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentimentError::invalid_input("training set is empty"))
//! }
//!
//! let err = example_operation().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidInput);
//! ```

use std::io;

use serde::Serialize;
use thiserror::Error;

/// The main error type for sentiment operations.
#[derive(Error, Debug)]
pub enum SentimentError {
    /// I/O errors while reading or writing params blobs and datasets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors while reading a dataset.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The params blob does not follow the expected schema.
    #[error("Malformed params: {0}")]
    MalformedParams(String),

    /// Classification was requested from a model with degenerate label frequencies.
    #[error("Model not trained: {0}")]
    ModelNotTrained(String),

    /// Caller supplied unusable input (empty training set, bad request body).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for operations that may fail with SentimentError.
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Coarse classification of errors, used for propagation decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    IoFailure,
    MalformedParams,
    ModelNotTrained,
    InvalidInput,
}

impl SentimentError {
    /// Create a new malformed params error.
    pub fn malformed_params<S: Into<String>>(msg: S) -> Self {
        SentimentError::MalformedParams(msg.into())
    }

    /// Create a new model not trained error.
    pub fn model_not_trained<S: Into<String>>(msg: S) -> Self {
        SentimentError::ModelNotTrained(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SentimentError::InvalidInput(msg.into())
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SentimentError::Io(_) | SentimentError::Csv(_) => ErrorKind::IoFailure,
            SentimentError::MalformedParams(_) => ErrorKind::MalformedParams,
            SentimentError::ModelNotTrained(_) => ErrorKind::ModelNotTrained,
            SentimentError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}
