// Main library entry point for Flow outline.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{build_outline, parse_program, to_outline, Outline, OutlineError, OutlineOptions};
