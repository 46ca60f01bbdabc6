//! Token filters that normalize tokens after splitting.

pub mod ascii_letters;
pub mod lowercase;

use crate::analysis::token::TokenStream;

/// Trait for filters that transform a token stream.
///
/// Filters never drop tokens in this crate; a token that loses all of its
/// characters stays in the stream as an empty token.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}
