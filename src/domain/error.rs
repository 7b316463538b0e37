use std::io;

use thiserror::Error;

/// Library-wide error type for aimgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A positional argument was empty.
    #[error("Argument '{0}' must not be empty")]
    EmptyIdentifier(&'static str),

    /// An embedded skeleton asset is missing from the binary.
    #[error("Missing skeleton asset '{0}'")]
    MissingSkeleton(String),

    /// A skeleton template failed to render.
    #[error("Failed to render skeleton '{name}': {reason}")]
    SkeletonRender { name: String, reason: String },
}
