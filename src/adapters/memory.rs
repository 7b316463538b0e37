use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::BuildIndexStore;

/// In-memory build index for exercising the read-then-append sequence in
/// tests.
///
/// `None` models a missing top-level index file.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuildIndex {
    lines: Arc<Mutex<Option<Vec<String>>>>,
}

impl MemoryBuildIndex {
    /// An index that does not exist.
    pub fn absent() -> Self {
        Self::default()
    }

    /// An existing index seeded with the given lines.
    pub fn with_lines(lines: &[&str]) -> Self {
        Self { lines: Arc::new(Mutex::new(Some(lines.iter().map(|s| s.to_string()).collect()))) }
    }

    /// Snapshot of the current lines; empty if the index does not exist.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone().unwrap_or_default()
    }
}

impl BuildIndexStore for MemoryBuildIndex {
    fn exists(&self) -> bool {
        self.lines.lock().unwrap().is_some()
    }

    fn read_lines(&self) -> Result<Vec<String>, AppError> {
        Ok(self.lines.lock().unwrap().clone().unwrap_or_default())
    }

    fn append_line(&self, line: &str) -> Result<(), AppError> {
        self.lines.lock().unwrap().get_or_insert_with(Vec::new).push(line.to_string());
        Ok(())
    }
}
