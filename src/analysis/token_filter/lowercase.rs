//! Case folding.

use super::Filter;
use crate::analysis::token::TokenStream;

/// Folds every token to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|mut token| {
            // After the letter filter tokens are ASCII and fold in place.
            if token.text.is_ascii() {
                token.text.make_ascii_lowercase();
                token
            } else {
                token.text = token.text.to_lowercase();
                token
            }
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
