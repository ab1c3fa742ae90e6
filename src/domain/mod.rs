// Domain layer for Flow outline: the AST model and the outline transform.

pub mod ast;
pub mod builder;
pub mod error;
pub mod exports;
pub mod options;
pub mod outline;
pub mod patterns;
pub mod specs;
pub mod text;

pub use ast::{parse_program, Node, Program};
pub use builder::build_outline;
pub use error::{OutlineError, Result};
pub use options::{Keyword, OutlineOptions, ShowKeywords};
pub use outline::{Outline, OutlineKind, OutlineTree, Point};

/// Parse raw `flow ast` output and build its outline.
pub fn to_outline(raw: &str, options: &OutlineOptions) -> Result<Outline> {
    let program = parse_program(raw)?;
    build_outline(&program, options)
}
