//! Text analysis for sentiment classification.
//!
//! A sentence goes through a small pipeline before it reaches the model:
//!
//! 1. [`tokenizer::split::SplitTokenizer`] splits on `;` or runs of ASCII
//!    whitespace, keeping empty segments.
//! 2. [`token_filter::ascii_letters::AsciiLetterFilter`] drops every
//!    character outside `[a-zA-Z ]`.
//! 3. [`token_filter::lowercase::LowercaseFilter`] folds case.
//!
//! Tokens that end up empty are kept; it is up to the trainer to skip them.
//!
//! # Examples
//!
//! ```
//! use sentiment_bayes::analysis::tokenize;
//!
//! assert_eq!(tokenize("Posi+tive; sU+s56+§.!-hi"), vec!["positive", "", "sushi"]);
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, SentimentAnalyzer, tokenize};
pub use token::{Token, TokenStream};
