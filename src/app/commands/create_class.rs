//! Scaffold a class triplet (`.hpp`/`.cpp`/`.tpp`) and register its build
//! files.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::registrar::{self, Registration};
use crate::domain::{AppError, BUILD_FILE, ClassScaffoldRequest, SkeletonRenderer};
use crate::ports::{BuildIndexStore, ScaffoldStore, SkeletonStore};

const HEADER_SKELETON: &str = "class_header.hpp.j2";
const BODY_SKELETON: &str = "class_body.cpp.j2";
const FRAGMENT_SKELETON: &str = "cmake_class.txt.j2";

/// Result of a class scaffold run.
#[derive(Debug)]
pub struct ClassOutcome {
    /// Written files, relative to the invocation directory.
    pub created: Vec<PathBuf>,
    pub registration: Registration,
}

/// Execute the create-class command.
///
/// Creates the target directory if absent, writes the three class artifacts
/// and the local build fragment (all unconditional overwrites), then
/// registers the directory in the top-level index if one exists.
pub fn execute<S, B, K>(
    ctx: &AppContext<S, B, K>,
    request: &ClassScaffoldRequest,
) -> Result<ClassOutcome, AppError>
where
    S: ScaffoldStore,
    B: BuildIndexStore,
    K: SkeletonStore,
{
    if request.folder.is_empty() {
        return Err(AppError::EmptyIdentifier("folder"));
    }
    if request.class_name.is_empty() {
        return Err(AppError::EmptyIdentifier("class"));
    }
    if request.group_name.is_empty() {
        return Err(AppError::EmptyIdentifier("group"));
    }

    ctx.scaffold().ensure_dir(&request.folder)?;

    let renderer = SkeletonRenderer::new();
    let vars = HashMap::from([
        ("class_name".to_string(), request.class_name.clone()),
        ("type_name".to_string(), request.type_name()),
        ("group_name".to_string(), request.group_name.clone()),
    ]);

    let header = render(ctx, &renderer, HEADER_SKELETON, &vars)?;
    // the .cpp and .tpp skeletons are identical: a namespace body with empty
    // member-category sections
    let body = render(ctx, &renderer, BODY_SKELETON, &vars)?;
    let fragment = render(ctx, &renderer, FRAGMENT_SKELETON, &vars)?;

    let mut created = Vec::new();
    created.push(ctx.scaffold().write_file(&request.folder, &request.header_file(), &header)?);
    created.push(ctx.scaffold().write_file(&request.folder, &request.source_file(), &body)?);
    created.push(ctx.scaffold().write_file(&request.folder, &request.template_file(), &body)?);
    created.push(ctx.scaffold().write_file(&request.folder, BUILD_FILE, &fragment)?);

    let registration = registrar::register_subdirectory(ctx.index(), &request.folder)?;

    Ok(ClassOutcome { created, registration })
}

fn render<S, B, K>(
    ctx: &AppContext<S, B, K>,
    renderer: &SkeletonRenderer,
    name: &str,
    vars: &HashMap<String, String>,
) -> Result<String, AppError>
where
    S: ScaffoldStore,
    B: BuildIndexStore,
    K: SkeletonStore,
{
    let source = ctx.skeletons().skeleton(name)?;
    renderer.render(name, &source, vars)
}
