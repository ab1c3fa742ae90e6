//! Typed text tokens used to render outline labels.
//!
//! A label is an ordered list of tokens. Whitespace is an explicit token, so
//! downstream views can style each piece and still reproduce exact spacing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Keyword,
    ClassName,
    Constructor,
    Method,
    Param,
    String,
    Whitespace,
    Plain,
    Type,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToken {
    pub kind: TokenKind,
    pub value: String,
}

impl TextToken {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

pub fn keyword(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::Keyword, value)
}

pub fn class_name(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::ClassName, value)
}

pub fn method(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::Method, value)
}

pub fn param(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::Param, value)
}

pub fn string(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::String, value)
}

pub fn whitespace(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::Whitespace, value)
}

pub fn plain(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::Plain, value)
}

pub fn type_name(value: impl Into<String>) -> TextToken {
    TextToken::new(TokenKind::Type, value)
}

/// Append-only token sequence forming one label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenizedText(Vec<TextToken>);

impl TokenizedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: TextToken) -> &mut Self {
        self.0.push(token);
        self
    }

    pub fn append(&mut self, other: TokenizedText) -> &mut Self {
        self.0.extend(other.0);
        self
    }

    /// A keyword followed by a single space.
    pub fn keyword_with_space(&mut self, value: &str) -> &mut Self {
        self.push(keyword(value)).push(whitespace(" "))
    }

    pub fn tokens(&self) -> &[TextToken] {
        &self.0
    }

    /// The label as plain text, token values concatenated.
    pub fn text(&self) -> String {
        self.0.iter().map(|t| t.value.as_str()).collect()
    }
}

impl From<Vec<TextToken>> for TokenizedText {
    fn from(tokens: Vec<TextToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<TextToken> for TokenizedText {
    fn from_iter<I: IntoIterator<Item = TextToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
