//! Filesystem adapters rooted at the invocation's working directory.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::domain::{AppError, BUILD_FILE};
use crate::ports::{BuildIndexStore, ScaffoldStore};

/// Writes generated artifacts relative to a root directory.
pub struct FilesystemScaffoldStore {
    root: PathBuf,
}

impl FilesystemScaffoldStore {
    /// Store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self { root: env::current_dir()? })
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ScaffoldStore for FilesystemScaffoldStore {
    fn ensure_dir(&self, dir: &str) -> Result<(), AppError> {
        fs::create_dir_all(self.root.join(dir)).map_err(AppError::from)
    }

    fn write_file(&self, dir: &str, file_name: &str, contents: &str) -> Result<PathBuf, AppError> {
        let relative = PathBuf::from(dir).join(file_name);
        fs::write(self.root.join(&relative), contents)?;
        Ok(relative)
    }
}

/// The shared top-level `CMakeLists.txt`, read and conditionally appended.
pub struct FilesystemBuildIndex {
    path: PathBuf,
}

impl FilesystemBuildIndex {
    /// Index at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self { path: env::current_dir()?.join(BUILD_FILE) })
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BuildIndexStore for FilesystemBuildIndex {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_lines(&self) -> Result<Vec<String>, AppError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    fn append_line(&self, line: &str) -> Result<(), AppError> {
        // append without create: the index is never created by this tool
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
