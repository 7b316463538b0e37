//! Idempotent registration of a subdirectory in the top-level build index.

use crate::domain::AppError;
use crate::ports::BuildIndexStore;

/// Outcome of a top-level index registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The reference line was appended to the index.
    Appended(String),
    /// An existing line already contains the reference; nothing was written.
    AlreadyRegistered(String),
    /// No top-level index exists; registration is skipped entirely.
    NoIndex,
}

/// The reference line registering `folder` with the top-level build.
pub fn reference_line(folder: &str) -> String {
    format!("add_subdirectory({folder})")
}

/// Register `folder` in the top-level index, at most once.
///
/// The duplicate check is substring containment against every existing line,
/// not equality: a longer line that merely contains the reference also counts
/// as registered. The index is never created when absent.
///
/// Read-then-append is unprotected; concurrent invocations can race. Single
/// invocation at a time is assumed.
pub fn register_subdirectory<B: BuildIndexStore>(
    index: &B,
    folder: &str,
) -> Result<Registration, AppError> {
    if !index.exists() {
        return Ok(Registration::NoIndex);
    }

    let reference = reference_line(folder);
    for line in index.read_lines()? {
        if line.contains(&reference) {
            return Ok(Registration::AlreadyRegistered(line));
        }
    }

    index.append_line(&reference)?;
    Ok(Registration::Appended(reference))
}
