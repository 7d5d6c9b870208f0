//! Input sources for segmentation

use crate::types::Token;

/// Source material for a segmentation call.
///
/// Plain text is scanned by the segmenter's tokenizer. Pre-tokenized input
/// carries tokens with their own absolute positions, as produced by an
/// upstream extraction step; the segmenter keeps those positions and only
/// rescans each token for internal whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw text; resulting spans index into this string
    Text(String),
    /// Pre-positioned tokens; resulting spans index into the coordinate
    /// space the tokens were cut from
    Tokens(Vec<Token>),
}

impl Input {
    /// Input from raw text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Input from pre-positioned tokens.
    pub fn from_tokens(tokens: impl Into<Vec<Token>>) -> Self {
        Input::Tokens(tokens.into())
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&String> for Input {
    fn from(text: &String) -> Self {
        Input::Text(text.clone())
    }
}

impl From<Vec<Token>> for Input {
    fn from(tokens: Vec<Token>) -> Self {
        Input::Tokens(tokens)
    }
}

impl From<&[Token]> for Input {
    fn from(tokens: &[Token]) -> Self {
        Input::Tokens(tokens.to_vec())
    }
}
