//! Outline rendering options.
//!
//! Controls which keywords appear in labels and whether parameter lists are
//! rendered. Deserializable so a config file can supply it.

use serde::{Deserialize, Serialize};

use super::ast::DeclarationKind;

/// Depth at which the builder stops descending into nested classes and specs.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Keywords that can be shown or hidden in outline labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Export,
    Default,
    Const,
    Var,
    Let,
    Class,
    Function,
    Type,
}

impl Keyword {
    pub const ALL: [Keyword; 8] = [
        Keyword::Export,
        Keyword::Default,
        Keyword::Const,
        Keyword::Var,
        Keyword::Let,
        Keyword::Class,
        Keyword::Function,
        Keyword::Type,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Export => "export",
            Keyword::Default => "default",
            Keyword::Const => "const",
            Keyword::Var => "var",
            Keyword::Let => "let",
            Keyword::Class => "class",
            Keyword::Function => "function",
            Keyword::Type => "type",
        }
    }
}

impl From<DeclarationKind> for Keyword {
    fn from(kind: DeclarationKind) -> Self {
        match kind {
            DeclarationKind::Const => Keyword::Const,
            DeclarationKind::Let => Keyword::Let,
            DeclarationKind::Var => Keyword::Var,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One visibility toggle per keyword. All hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowKeywords {
    pub export: bool,
    pub default: bool,
    pub r#const: bool,
    pub var: bool,
    pub r#let: bool,
    pub class: bool,
    pub function: bool,
    pub r#type: bool,
}

impl ShowKeywords {
    pub fn all() -> Self {
        let mut keywords = Self::default();
        for keyword in Keyword::ALL {
            keywords.set(keyword, true);
        }
        keywords
    }

    pub fn shows(&self, keyword: Keyword) -> bool {
        match keyword {
            Keyword::Export => self.export,
            Keyword::Default => self.default,
            Keyword::Const => self.r#const,
            Keyword::Var => self.var,
            Keyword::Let => self.r#let,
            Keyword::Class => self.class,
            Keyword::Function => self.function,
            Keyword::Type => self.r#type,
        }
    }

    pub fn set(&mut self, keyword: Keyword, visible: bool) {
        let slot = match keyword {
            Keyword::Export => &mut self.export,
            Keyword::Default => &mut self.default,
            Keyword::Const => &mut self.r#const,
            Keyword::Var => &mut self.var,
            Keyword::Let => &mut self.r#let,
            Keyword::Class => &mut self.class,
            Keyword::Function => &mut self.function,
            Keyword::Type => &mut self.r#type,
        };
        *slot = visible;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineOptions {
    pub show_keywords: ShowKeywords,
    /// Render `(a, b)` after function and method names.
    pub show_function_args: bool,
    pub max_depth: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            show_keywords: ShowKeywords::default(),
            show_function_args: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl OutlineOptions {
    pub fn shows(&self, keyword: Keyword) -> bool {
        self.show_keywords.shows(keyword)
    }
}
