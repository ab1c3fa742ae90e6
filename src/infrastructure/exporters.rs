//! Outline exporters: JSON wire shape and indented text.

use std::io::{Result, Write};

use crate::application::FileOutline;
use crate::ports::OutlineExporter;

/// Writes `{"outlineTrees": [...]}` for a single file, or an array of
/// `{"path": ..., "outlineTrees": [...]}` objects for several.
pub struct JsonExporter {
    pub pretty: bool,
}

impl OutlineExporter for JsonExporter {
    fn export(&self, outlines: &[FileOutline], out: &mut dyn Write) -> Result<()> {
        let json = match outlines {
            [single] => self.to_string(&single.outline)?,
            many => self.to_string(&many)?,
        };
        writeln!(out, "{}", json)
    }
}

impl JsonExporter {
    fn to_string<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(std::io::Error::from)
    }
}

/// One label per line, children indented. Several files get a `path:` header each.
pub struct TextExporter;

impl OutlineExporter for TextExporter {
    fn export(&self, outlines: &[FileOutline], out: &mut dyn Write) -> Result<()> {
        let with_headers = outlines.len() > 1;
        for file in outlines {
            if with_headers {
                writeln!(out, "{}:", file.path)?;
            }
            for line in file.outline.to_lines() {
                if with_headers {
                    writeln!(out, "  {}", line)?;
                } else {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outline::{Extent, OutlineKind, OutlineTree, Point};
    use crate::domain::text::type_name;
    use crate::domain::Outline;

    fn file(path: &str, name: &str) -> FileOutline {
        let extent = Extent {
            start: Point::new(0, 0),
            end: Point::new(0, 10),
        };
        let tree = OutlineTree::leaf(
            OutlineKind::Interface,
            vec![type_name(name)].into(),
            Some(name.to_string()),
            extent,
        );
        FileOutline {
            path: path.to_string(),
            outline: Outline::new(vec![tree]),
        }
    }

    #[test]
    fn test_json_single_file_is_bare_outline() {
        let mut out = Vec::new();
        JsonExporter { pretty: false }
            .export(&[file("a.json", "A")], &mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["outlineTrees"][0]["representativeName"], "A");
        assert!(value.get("path").is_none());
    }

    #[test]
    fn test_json_many_files_carry_paths() {
        let mut out = Vec::new();
        JsonExporter { pretty: true }
            .export(&[file("a.json", "A"), file("b.json", "B")], &mut out)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[1]["path"], "b.json");
        assert_eq!(value[1]["outlineTrees"][0]["tokenizedText"][0]["value"], "B");
    }

    #[test]
    fn test_text_headers_only_for_many_files() {
        let mut out = Vec::new();
        TextExporter.export(&[file("a.json", "A")], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\n");

        let mut out = Vec::new();
        TextExporter
            .export(&[file("a.json", "A"), file("b.json", "B")], &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a.json:\n  A\nb.json:\n  B\n");
    }
}
