// Outline structures for Flow outline.
// Represents the navigable symbol tree handed to an outline view.

use serde::{Deserialize, Serialize};

use super::ast::SourceLocation;
use super::text::TokenizedText;

/// Zero-based row/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: u32,
    pub column: u32,
}

impl Point {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Start and end of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub start: Point,
    pub end: Point,
}

impl Extent {
    /// Convert a checker location (1-based lines) into zero-based points.
    /// Returns `None` when the node has no location or a line is 0.
    pub fn from_loc(loc: Option<SourceLocation>) -> Option<Extent> {
        let loc = loc?;
        if loc.start.line == 0 || loc.end.line == 0 {
            return None;
        }
        Some(Extent {
            start: Point::new(loc.start.line - 1, loc.start.column),
            end: Point::new(loc.end.line - 1, loc.end.column),
        })
    }
}

/// Kind of an outline entry, used by views for icons and theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
}

/// A node in the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineTree {
    pub kind: OutlineKind,
    pub tokenized_text: TokenizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,
    pub start_position: Point,
    pub end_position: Point,
    #[serde(default)]
    pub children: Vec<OutlineTree>,
}

impl OutlineTree {
    /// A childless entry.
    pub fn leaf(
        kind: OutlineKind,
        tokenized_text: TokenizedText,
        representative_name: Option<String>,
        extent: Extent,
    ) -> Self {
        Self {
            kind,
            tokenized_text,
            representative_name,
            start_position: extent.start,
            end_position: extent.end,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<OutlineTree>) -> Self {
        self.children = children;
        self
    }

    pub fn label(&self) -> String {
        self.tokenized_text.text()
    }

    fn write_lines(&self, indent: usize, out: &mut Vec<String>) {
        out.push(format!("{}{}", "  ".repeat(indent), self.label()));
        for child in &self.children {
            child.write_lines(indent + 1, out);
        }
    }
}

/// The outline of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub outline_trees: Vec<OutlineTree>,
}

impl Outline {
    pub fn new(outline_trees: Vec<OutlineTree>) -> Self {
        Self { outline_trees }
    }

    /// One label per line, children indented by two spaces per level.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for tree in &self.outline_trees {
            tree.write_lines(0, &mut lines);
        }
        lines
    }

    pub fn to_text(&self) -> String {
        self.to_lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ast::Position;
    use crate::domain::text::{method, string};

    fn extent() -> Extent {
        Extent {
            start: Point::new(0, 0),
            end: Point::new(2, 1),
        }
    }

    #[test]
    fn test_extent_converts_lines_to_zero_based() {
        let loc = SourceLocation {
            start: Position { line: 3, column: 4 },
            end: Position { line: 5, column: 1 },
        };
        let extent = Extent::from_loc(Some(loc)).unwrap();
        assert_eq!(extent.start, Point::new(2, 4));
        assert_eq!(extent.end, Point::new(4, 1));
    }

    #[test]
    fn test_extent_rejects_missing_or_zero_line() {
        assert!(Extent::from_loc(None).is_none());
        let loc = SourceLocation {
            start: Position { line: 0, column: 0 },
            end: Position { line: 1, column: 0 },
        };
        assert!(Extent::from_loc(Some(loc)).is_none());
    }

    #[test]
    fn test_to_text_indents_children() {
        let child = OutlineTree::leaf(
            OutlineKind::Function,
            vec![method("it"), string(" works")].into(),
            None,
            extent(),
        );
        let parent = OutlineTree::leaf(
            OutlineKind::Function,
            vec![method("describe")].into(),
            None,
            extent(),
        )
        .with_children(vec![child]);
        let outline = Outline::new(vec![parent]);
        assert_eq!(outline.to_text(), "describe\n  it works");
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing_name() {
        let tree = OutlineTree::leaf(
            OutlineKind::Module,
            vec![method("module.exports")].into(),
            None,
            extent(),
        );
        let value = serde_json::to_value(Outline::new(vec![tree])).unwrap();
        let entry = &value["outlineTrees"][0];
        assert_eq!(entry["kind"], "module");
        assert_eq!(entry["startPosition"]["row"], 0);
        assert_eq!(entry["endPosition"]["row"], 2);
        assert!(entry.get("representativeName").is_none());
        assert_eq!(entry["children"].as_array().unwrap().len(), 0);
    }
}
