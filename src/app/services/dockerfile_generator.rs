use minijinja::context;

use crate::adapters::templates::{DOCKERFILE, TemplateCatalog};
use crate::domain::AppError;

/// Render the tracking server image definition. The recipe is static.
pub fn render_dockerfile(templates: &TemplateCatalog) -> Result<String, AppError> {
    templates.render(DOCKERFILE, context! {})
}
