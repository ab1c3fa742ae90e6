use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::OutlineOptions;

/// Load outline options from a TOML file. Missing keys keep their defaults.
///
/// ```toml
/// show_function_args = false
///
/// [show_keywords]
/// export = true
/// const = true
/// ```
pub fn load_options(path: &Path) -> Result<OutlineOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;
    parse_options(&content).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse_options(content: &str) -> Result<OutlineOptions> {
    Ok(toml::from_str(content)?)
}
