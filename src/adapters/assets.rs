use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::SkeletonStore;

static SKELETON_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/skeletons");

/// Skeleton templates embedded into the binary at build time.
#[derive(Debug, Default)]
pub struct EmbeddedSkeletonStore;

impl EmbeddedSkeletonStore {
    pub fn new() -> Self {
        Self
    }
}

impl SkeletonStore for EmbeddedSkeletonStore {
    fn skeleton(&self, name: &str) -> Result<String, AppError> {
        SKELETON_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::MissingSkeleton(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expected_skeletons_are_embedded() {
        let store = EmbeddedSkeletonStore::new();
        for name in [
            "class_header.hpp.j2",
            "class_body.cpp.j2",
            "test_suite.cpp.j2",
            "cmake_class.txt.j2",
            "cmake_test.txt.j2",
        ] {
            assert!(store.skeleton(name).is_ok(), "{name} should be embedded");
        }
    }

    #[test]
    fn unknown_skeleton_is_reported_by_name() {
        let store = EmbeddedSkeletonStore::new();
        let err = store.skeleton("nope.j2").unwrap_err();
        assert!(matches!(err, AppError::MissingSkeleton(ref name) if name == "nope.j2"));
    }
}
