//! Analyzers chain a tokenizer with a sequence of filters.

use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::ascii_letters::AsciiLetterFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::split::SplitTokenizer;

/// Trait for turning a sentence into normalized tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}

/// The analyzer used for both training and inference.
///
/// Split on `;` or ASCII whitespace, strip everything outside `[a-zA-Z ]`,
/// lowercase. Token order and duplicates are preserved and empty tokens are
/// kept.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl SentimentAnalyzer {
    /// Create the standard sentiment analyzer.
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(SplitTokenizer::default()))
            .add_filter(Arc::new(AsciiLetterFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
    }

    /// Create an analyzer with a custom tokenizer and no filters.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        SentimentAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Analyze text and collect the token strings.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SentimentAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let mut tokens = self.tokenizer.tokenize(text);
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    fn name(&self) -> &str {
        "sentiment"
    }
}

static DEFAULT_ANALYZER: LazyLock<SentimentAnalyzer> = LazyLock::new(SentimentAnalyzer::new);

/// Tokenize a sentence with the standard [`SentimentAnalyzer`].
pub fn tokenize(sentence: &str) -> Vec<String> {
    DEFAULT_ANALYZER.tokenize(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_reference_sentence() {
        assert_eq!(
            tokenize("Posi+tive; sU+s56+§.!-hi"),
            vec!["positive", "", "sushi"]
        );
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("Good GOOD shop, good!"),
            vec!["good", "good", "shop", "good"]
        );
    }

    #[test]
    fn test_tokenize_empty_sentence() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn test_custom_pipeline_without_filters() {
        let analyzer = SentimentAnalyzer::with_tokenizer(Arc::new(SplitTokenizer::default()));
        assert_eq!(analyzer.tokenize("Good SHOP"), vec!["Good", "SHOP"]);
    }

    #[test]
    fn test_debug_lists_pipeline() {
        let debug = format!("{:?}", SentimentAnalyzer::new());
        assert!(debug.contains("split"));
        assert!(debug.contains("ascii_letters"));
        assert!(debug.contains("lowercase"));
    }
}
