//! Port for writing generated artifacts.

use std::path::PathBuf;

use crate::domain::AppError;

/// Destination for generated artifact files, rooted at the invocation
/// directory.
pub trait ScaffoldStore {
    /// Create `dir` (and any missing parents) if absent.
    fn ensure_dir(&self, dir: &str) -> Result<(), AppError>;

    /// Write `contents` to `dir/file_name`, overwriting unconditionally.
    ///
    /// Returns the written path relative to the store root.
    fn write_file(&self, dir: &str, file_name: &str, contents: &str) -> Result<PathBuf, AppError>;
}
