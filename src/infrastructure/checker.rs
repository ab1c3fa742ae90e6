//! Flow checker runner.
//!
//! Runs the `flow` binary with a command such as `ast` and pipes a source file
//! through standard input. No server management: each call is one process.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::ports::CheckerProcess;

/// Binary used when none is configured.
pub const DEFAULT_FLOW_BIN: &str = "flow";

/// A `flow` executable on disk or in `PATH`.
#[derive(Debug, Clone)]
pub struct FlowBinary {
    program: PathBuf,
}

impl Default for FlowBinary {
    fn default() -> Self {
        Self::new(DEFAULT_FLOW_BIN)
    }
}

impl FlowBinary {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Describe the command that `run_command` would spawn.
    pub fn command_spec(&self, args: &[&str]) -> CommandSpec {
        CommandSpec {
            program: self.program.display().to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl CheckerProcess for FlowBinary {
    fn run_command(&self, args: &[&str], stdin: &str) -> Result<String> {
        let spec = self.command_spec(args);
        debug!(program = %spec.program, args = ?spec.args, "running checker");

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to execute {}. Is flow installed?", spec.program))?;

        // Dropping the pipe closes stdin. A failed write only surfaces if the
        // checker itself exited successfully.
        let written = match child.stdin.take() {
            Some(mut pipe) => pipe.write_all(stdin.as_bytes()),
            None => Err(io::Error::new(
                io::ErrorKind::Other,
                "checker stdin was not captured",
            )),
        };

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", spec.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} {} failed with exit code {:?}: {}",
                spec.program,
                spec.args.join(" "),
                output.status.code(),
                stderr.trim()
            );
        }

        written.context("Failed to write source to checker stdin")?;
        String::from_utf8(output.stdout).context("checker output was not valid UTF-8")
    }
}

/// Program and arguments of one checker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}
