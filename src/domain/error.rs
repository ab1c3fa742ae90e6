//! Error types for outline construction

use thiserror::Error;

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Errors that abort an outline.
///
/// Unknown statements, unusual property keys and similar gaps never show up
/// here: they simply produce no outline entry.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// A binding pattern of a kind the renderer has no rule for. Usually means
    /// the checker speaks a newer AST grammar than this crate.
    #[error("encountered unexpected argument type {kind}")]
    UnexpectedPattern { kind: String },

    /// The checker output was not JSON, or its root was not shaped like a program
    #[error("invalid AST JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The root node is something other than a `Program`
    #[error("expected a Program at the AST root, found `{kind}`")]
    NotAProgram { kind: String },
}

impl OutlineError {
    pub fn unexpected_pattern(kind: impl Into<String>) -> Self {
        Self::UnexpectedPattern { kind: kind.into() }
    }
}
