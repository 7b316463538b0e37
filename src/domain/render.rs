//! Skeleton rendering over MiniJinja.

use std::collections::HashMap;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::AppError;

/// Renders skeleton template source with named substitution slots.
pub struct SkeletonRenderer;

impl SkeletonRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `source` with the given variables.
    ///
    /// Undefined variables are a hard error so that a skeleton/context
    /// mismatch surfaces immediately instead of producing silent gaps in the
    /// generated file.
    pub fn render(
        &self,
        name: &str,
        source: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(source, vars).map_err(|err| AppError::SkeletonRender {
            name: name.to_string(),
            reason: err.to_string(),
        })
    }
}

impl Default for SkeletonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
