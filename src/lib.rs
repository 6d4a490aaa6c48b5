// ABOUTME: Main library module for the envject template injector
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod output;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use output::{FileWriter, OutputWriter, StdoutWriter};
pub use template::{TemplateContext, TemplateEngine};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
