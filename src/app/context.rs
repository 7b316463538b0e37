use crate::ports::{BuildIndexStore, ScaffoldStore, SkeletonStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ScaffoldStore, B: BuildIndexStore, K: SkeletonStore> {
    scaffold: S,
    index: B,
    skeletons: K,
}

impl<S: ScaffoldStore, B: BuildIndexStore, K: SkeletonStore> AppContext<S, B, K> {
    /// Create a new application context.
    pub fn new(scaffold: S, index: B, skeletons: K) -> Self {
        Self { scaffold, index, skeletons }
    }

    /// Get a reference to the artifact store.
    pub fn scaffold(&self) -> &S {
        &self.scaffold
    }

    /// Get a reference to the top-level build index.
    pub fn index(&self) -> &B {
        &self.index
    }

    /// Get a reference to the skeleton template store.
    pub fn skeletons(&self) -> &K {
        &self.skeletons
    }
}
