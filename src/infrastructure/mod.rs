// Infrastructure implementations for Flow outline.

pub mod checker;
pub mod concurrency;
pub mod config;
pub mod exporters;
pub mod logging;

pub use checker::FlowBinary;
pub use exporters::{JsonExporter, TextExporter};
