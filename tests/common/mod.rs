//! Shared testing utilities for aimgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command invoking the compiled `aimgen` binary in the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("aimgen").expect("Failed to locate aimgen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the top-level CMakeLists.txt in the working directory.
    pub fn index_path(&self) -> PathBuf {
        self.work_dir.join("CMakeLists.txt")
    }

    /// Seed a top-level CMakeLists.txt with the given content.
    pub fn write_top_level_index(&self, content: &str) {
        fs::write(self.index_path(), content).expect("Failed to seed top-level CMakeLists.txt");
    }

    /// Read the top-level CMakeLists.txt.
    pub fn read_index(&self) -> String {
        fs::read_to_string(self.index_path()).expect("Failed to read top-level CMakeLists.txt")
    }

    /// Read a generated artifact from `dir`.
    pub fn read_artifact(&self, dir: &str, file: &str) -> String {
        fs::read_to_string(self.work_dir.join(dir).join(file))
            .expect("Failed to read generated artifact")
    }

    /// Whether an artifact exists in `dir`.
    pub fn artifact_exists(&self, dir: &str, file: &str) -> bool {
        self.work_dir.join(dir).join(file).exists()
    }
}
