//! Port for fetching skeleton template source.

use crate::domain::AppError;

/// Lookup of skeleton template source by asset name.
pub trait SkeletonStore {
    fn skeleton(&self, name: &str) -> Result<String, AppError>;
}
