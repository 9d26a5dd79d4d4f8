//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Captured API response with Alice Smith, Bob Jones, Cara Smith.
    pub fn sample_records(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("rolodeck-client/tests/samples/randomuser_page.json")
    }

    /// Command pointed at a config path that does not exist, so tests
    /// never pick up a developer's real config file.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolodeck").expect("binary builds");
        cmd.arg("--config")
            .arg(self.temp_dir.path().join("config.toml"));
        cmd
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    pub fn temp_path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }
}
