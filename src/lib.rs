//! aimgen: scaffold AIM solver class and test skeletons and register them
//! with the CMake build.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::PathBuf;

use adapters::{EmbeddedSkeletonStore, FilesystemBuildIndex, FilesystemScaffoldStore};
use app::AppContext;
use app::commands::{create_class, create_test};
use domain::{ClassScaffoldRequest, TestScaffoldRequest};

pub use app::commands::create_class::ClassOutcome;
pub use app::commands::create_test::TestOutcome;
pub use app::commands::registrar::Registration;
pub use domain::AppError;

/// Scaffold a class triplet in `folder` and register it with the build.
///
/// Writes `<class>.hpp`, `<class>.cpp`, `<class>.tpp` and the local
/// `CMakeLists.txt` fragment into `folder` (created if absent), then appends
/// `add_subdirectory(<folder>)` to the top-level `CMakeLists.txt` in the
/// current directory unless it is absent or already references the folder.
pub fn create_class(
    folder: &str,
    class_name: &str,
    group_name: &str,
) -> Result<ClassOutcome, AppError> {
    let ctx = AppContext::new(
        FilesystemScaffoldStore::current()?,
        FilesystemBuildIndex::current()?,
        EmbeddedSkeletonStore::new(),
    );

    let request = ClassScaffoldRequest::new(folder, class_name, group_name);
    let outcome = create_class::execute(&ctx, &request)?;
    report(&outcome.created, &outcome.registration);
    Ok(outcome)
}

/// Scaffold a GoogleTest suite for `folder` and register it with the build.
///
/// Writes `<folder>Test.cpp` and the local `CMakeLists.txt` fragment into
/// `folder` (created if absent), then performs the same top-level index
/// registration as [`create_class`].
pub fn create_test(folder: &str) -> Result<TestOutcome, AppError> {
    let ctx = AppContext::new(
        FilesystemScaffoldStore::current()?,
        FilesystemBuildIndex::current()?,
        EmbeddedSkeletonStore::new(),
    );

    let request = TestScaffoldRequest::new(folder);
    let outcome = create_test::execute(&ctx, &request)?;
    report(&outcome.created, &outcome.registration);
    Ok(outcome)
}

fn report(created: &[PathBuf], registration: &Registration) {
    for path in created {
        println!("✅ Created {}", path.display());
    }
    match registration {
        Registration::Appended(line) => {
            println!("✅ Registered in top-level CMakeLists.txt: {line}");
        }
        Registration::AlreadyRegistered(line) => {
            println!("Already registered in top-level CMakeLists.txt: {line}");
        }
        Registration::NoIndex => {}
    }
}
