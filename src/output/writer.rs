// ABOUTME: Output writers for rendered template content
// ABOUTME: Handles writing rendered results to files or standard output

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::error::{OutputError, Result};

pub trait OutputWriter: Send + Sync {
    fn write(&self, content: &str, destination: &Path) -> Result<()>;
}

pub struct FileWriter;

pub struct StdoutWriter;

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for FileWriter {
    /// Write content to the destination path, truncating any existing file.
    ///
    /// The parent directory must already exist; a failed write may leave a
    /// partial file behind.
    fn write(&self, content: &str, destination: &Path) -> Result<()> {
        fs::write(destination, content).map_err(|e| OutputError::WriteError {
            message: format!("Failed to write file {}: {}", destination.display(), e),
        })?;

        info!(
            "Output written to file: {} ({} bytes)",
            destination.display(),
            content.len()
        );
        Ok(())
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str, _destination: &Path) -> Result<()> {
        println!("{}", content);

        debug!("Output written to stdout ({} chars)", content.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer() {
        let writer = FileWriter::new();
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("test_output.txt");

        let result = writer.write("Test file content", &test_file);
        assert!(result.is_ok());

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "Test file content");
    }

    #[test]
    fn test_file_writer_overwrites() {
        let writer = FileWriter::new();
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("test_output.txt");

        fs::write(&test_file, "previous content, longer than the new one").unwrap();

        writer.write("short", &test_file).unwrap();

        let content = fs::read_to_string(&test_file).unwrap();
        assert_eq!(content, "short");
    }

    #[test]
    fn test_file_writer_missing_parent_directory() {
        let writer = FileWriter::new();
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("missing").join("test_output.txt");

        let result = writer.write("content", &test_file);
        assert!(result.is_err());
    }

    #[test]
    fn test_stdout_writer() {
        let writer = StdoutWriter::new();

        let result = writer.write("Test output", &PathBuf::from("ignored"));
        assert!(result.is_ok());
    }
}
