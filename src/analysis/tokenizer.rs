//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline: they cut a sentence into
//! raw segments. Normalization is left to [`crate::analysis::token_filter`].

pub mod split;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is total: every string, including the empty one, yields a
/// stream. The trait requires `Send + Sync` so a tokenizer can be shared
/// between request handlers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}
