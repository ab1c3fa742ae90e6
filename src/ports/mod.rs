use std::io::Write;

use crate::application::FileOutline;

/// The external type checker: runs one command with `stdin` piped in and
/// returns its standard output.
pub trait CheckerProcess: Send + Sync {
    fn run_command(&self, args: &[&str], stdin: &str) -> anyhow::Result<String>;
}

pub trait OutlineExporter {
    fn export(&self, outlines: &[FileOutline], out: &mut dyn Write) -> std::io::Result<()>;
}
