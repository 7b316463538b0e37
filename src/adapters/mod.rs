mod assets;
mod filesystem;
mod memory;

pub use assets::EmbeddedSkeletonStore;
pub use filesystem::{FilesystemBuildIndex, FilesystemScaffoldStore};
pub use memory::MemoryBuildIndex;
