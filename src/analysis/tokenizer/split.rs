//! Separator-based tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SentimentError};

/// A tokenizer that cuts text at every match of a separator pattern.
///
/// Unlike a match-extracting tokenizer, the text *between* separators
/// becomes the tokens, and empty segments survive:
///
/// - if the separator never matches, the whole input is one token
///   (so the empty sentence yields a single empty token);
/// - leading empty segments are kept;
/// - trailing empty segments are dropped.
#[derive(Clone, Debug)]
pub struct SplitTokenizer {
    /// The separator pattern
    pattern: Arc<Regex>,
}

impl SplitTokenizer {
    /// Semicolon, or a run of ASCII whitespace.
    pub const DEFAULT_PATTERN: &'static str = r";|(?-u:\s)+";

    /// Create a new split tokenizer with the default separator.
    pub fn new() -> Result<Self> {
        Self::with_pattern(Self::DEFAULT_PATTERN)
    }

    /// Create a split tokenizer with a custom separator pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SentimentError::invalid_input(format!("Invalid split pattern: {e}")))?;

        Ok(SplitTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Byte ranges of the segments between separators.
    fn segments(&self, text: &str) -> Vec<(usize, usize)> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            segments.push((last_end, mat.start()));
            last_end = mat.end();
        }

        if segments.is_empty() {
            return vec![(0, text.len())];
        }
        segments.push((last_end, text.len()));

        while segments.last().is_some_and(|&(start, end)| start == end) {
            segments.pop();
        }
        segments
    }
}

impl Default for SplitTokenizer {
    fn default() -> Self {
        Self::new().expect("Default split pattern should be valid")
    }
}

impl Tokenizer for SplitTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = self
            .segments(text)
            .into_iter()
            .map(|(start, end)| Token::new(&text[start..end]))
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "split"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        SplitTokenizer::new()
            .unwrap()
            .tokenize(text)
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_split_on_semicolon_and_whitespace() {
        assert_eq!(
            texts("Posi+tive; sU+s56+§.!-hi"),
            vec!["Posi+tive", "", "sU+s56+§.!-hi"]
        );
        assert_eq!(texts("good \t\n shop"), vec!["good", "shop"]);
        assert_eq!(texts("a;;b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_input_yields_single_empty_token() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn test_leading_kept_trailing_dropped() {
        assert_eq!(texts(" good shop "), vec!["", "good", "shop"]);
        assert_eq!(texts("good;"), vec!["good"]);
        assert!(texts(";").is_empty());
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        // U+00A0 (no-break space) is not a separator.
        assert_eq!(texts("good\u{a0}shop"), vec!["good\u{a0}shop"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(SplitTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SplitTokenizer::default().name(), "split");
    }
}
