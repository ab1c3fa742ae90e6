use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::domain::{to_outline, Outline, OutlineOptions};
use crate::ports::CheckerProcess;

/// Outline of a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutline {
    pub path: String,
    #[serde(flatten)]
    pub outline: Outline,
}

pub struct OutlineUsecase<'a> {
    pub checker: &'a dyn CheckerProcess,
    pub options: &'a OutlineOptions,
}

impl<'a> OutlineUsecase<'a> {
    /// Ask the checker for the AST of `source` and outline it.
    pub fn outline_source(&self, source: &str) -> Result<Outline> {
        let raw = self
            .checker
            .run_command(&["ast"], source)
            .context("Failed to obtain AST from checker")?;
        debug!(bytes = raw.len(), "received AST");
        self.outline_ast(&raw)
    }

    /// Outline an AST that is already available as JSON.
    pub fn outline_ast(&self, raw: &str) -> Result<Outline> {
        to_outline(raw, self.options).context("Failed to build outline")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CannedChecker {
        output: String,
        calls: Mutex<Vec<(Vec<String>, String)>>,
    }

    impl CheckerProcess for CannedChecker {
        fn run_command(&self, args: &[&str], stdin: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((args.iter().map(|a| a.to_string()).collect(), stdin.to_string()));
            Ok(self.output.clone())
        }
    }

    #[test]
    fn test_outline_source_pipes_source_to_ast_command() {
        let checker = CannedChecker {
            output: r#"{"type": "Program", "body": [{
                "type": "TypeAlias",
                "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 20}},
                "id": {"type": "Identifier", "name": "Id"}
            }]}"#
                .to_string(),
            calls: Mutex::new(Vec::new()),
        };
        let options = OutlineOptions::default();
        let usecase = OutlineUsecase {
            checker: &checker,
            options: &options,
        };

        let outline = usecase.outline_source("type Id = string;").unwrap();
        assert_eq!(outline.to_lines(), vec!["Id"]);

        let calls = checker.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, vec!["ast".to_string()]);
        assert_eq!(calls[0].1, "type Id = string;");
    }

    #[test]
    fn test_outline_ast_reports_invalid_json() {
        let checker = CannedChecker {
            output: String::new(),
            calls: Mutex::new(Vec::new()),
        };
        let options = OutlineOptions::default();
        let usecase = OutlineUsecase {
            checker: &checker,
            options: &options,
        };
        let err = usecase.outline_ast("Error: not a flow project").unwrap_err();
        assert!(format!("{:#}", err).contains("invalid AST JSON"));
    }
}
