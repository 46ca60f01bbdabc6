//! Filter keeping only ASCII letters and spaces.

use super::Filter;
use crate::analysis::token::TokenStream;

/// Removes every character outside `[a-zA-Z ]` from each token.
///
/// Digits, punctuation and all non-ASCII characters disappear. Tokens made
/// only of such characters become empty but are not removed.
#[derive(Clone, Debug, Default)]
pub struct AsciiLetterFilter;

impl AsciiLetterFilter {
    /// Create a new ASCII letter filter.
    pub fn new() -> Self {
        AsciiLetterFilter
    }
}

impl Filter for AsciiLetterFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|mut token| {
            token
                .text
                .retain(|c| c.is_ascii_alphabetic() || c == ' ');
            token
        }))
    }

    fn name(&self) -> &'static str {
        "ascii_letters"
    }
}
