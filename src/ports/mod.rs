mod build_index;
mod scaffold_store;
mod skeleton_store;

pub use build_index::BuildIndexStore;
pub use scaffold_store::ScaffoldStore;
pub use skeleton_store::SkeletonStore;
