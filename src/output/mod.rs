// ABOUTME: Output module for rendered template persistence
// ABOUTME: Exports writer implementations for file and stdout destinations

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{FileWriter, OutputWriter, StdoutWriter};
