//! Token types flowing through the analysis pipeline.

/// One word of a sentence, as split by a tokenizer and rewritten by filters.
///
/// The text may become empty during normalization; such tokens are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }
}

/// A boxed iterator of tokens, the currency between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
