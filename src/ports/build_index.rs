//! Port for the shared top-level build index.

use crate::domain::AppError;

/// Repository interface over the top-level `CMakeLists.txt`.
///
/// The index is pre-existing shared state owned by the caller's project:
/// implementations must never create it. Injecting the port keeps the
/// read-then-append sequence testable against an in-memory fake.
pub trait BuildIndexStore {
    /// Whether the index file exists at all.
    fn exists(&self) -> bool;

    /// All lines of the index, without trailing newlines.
    fn read_lines(&self) -> Result<Vec<String>, AppError>;

    /// Append a single line at the end of the index.
    fn append_line(&self, line: &str) -> Result<(), AppError>;
}
