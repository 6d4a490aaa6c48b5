// ABOUTME: Error types for output handling operations
// ABOUTME: Defines specific error types for writing rendered templates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Write error: {message}")]
    WriteError { message: String },
}

pub type Result<T> = std::result::Result<T, OutputError>;
