mod error;
mod render;
mod request;

pub use error::AppError;
pub use render::SkeletonRenderer;
pub use request::{ClassScaffoldRequest, TestScaffoldRequest, type_name};

/// Name of the per-directory build fragment and of the shared top-level index.
pub const BUILD_FILE: &str = "CMakeLists.txt";
