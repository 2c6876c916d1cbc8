//! Embedded artifact templates rendered with minijinja.

mod asset_collect;
mod filters;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

use self::asset_collect::collect_template_sources;

static TEMPLATE_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const DOCKERFILE: &str = "Dockerfile.j2";
pub const COMPOSE: &str = "docker-compose.yml.j2";
pub const TEAM_SERVICE: &str = "partials/team_service.yml.j2";
pub const SETUP_SCRIPT: &str = "setup.sh.j2";
pub const SUMMARY_BRIEF: &str = "summary/brief.md.j2";
pub const SUMMARY_DETAILED: &str = "summary/detailed.md.j2";

/// Registry of the embedded templates.
#[derive(Debug)]
pub struct TemplateCatalog {
    env: Environment<'static>,
}

impl TemplateCatalog {
    /// Load every template under `src/assets/templates`.
    pub fn embedded() -> Result<Self, AppError> {
        let sources = collect_template_sources(&TEMPLATE_DIR)?;
        if sources.is_empty() {
            return Err(AppError::template("<embedded>", "no templates are embedded"));
        }

        let mut env = build_environment();
        for source in &sources {
            env.add_template(source.name, source.content)
                .map_err(|e| AppError::template(source.name, e))?;
        }

        Ok(Self { env })
    }

    /// Render the template registered under `name`.
    pub fn render(&self, name: &str, ctx: Value) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| AppError::template(name, e))?;
        template.render(ctx).map_err(|e| AppError::template(name, e))
    }
}

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_filter("yaml_quote", filters::yaml_quote);
    env.add_filter("shell_quote", filters::shell_quote);
    env
}
