// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for setting up test templates and output paths

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.tpl", name))
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.conf", name))
    }

    pub fn create_template_file(&self, name: &str, content: &str) -> PathBuf {
        let template_file = self.template_file(name);
        fs::write(&template_file, content).expect("Failed to write template file");
        template_file
    }
}
