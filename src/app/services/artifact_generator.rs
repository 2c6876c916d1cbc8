//! Renders the full artifact set for one configuration.

use crate::adapters::templates::TemplateCatalog;
use crate::domain::{AppError, ArtifactKind, FleetConfig, GeneratedArtifact};

use super::{render_compose, render_dockerfile, render_setup_script, render_summary};

/// Renders every artifact in memory so a template failure never leaves a
/// partially written output directory.
pub struct ArtifactGenerator<'a> {
    templates: &'a TemplateCatalog,
}

impl<'a> ArtifactGenerator<'a> {
    pub fn new(templates: &'a TemplateCatalog) -> Self {
        Self { templates }
    }

    /// Render one artifact.
    pub fn render(
        &self,
        kind: ArtifactKind,
        config: &FleetConfig,
        host: &str,
    ) -> Result<GeneratedArtifact, AppError> {
        let content = match kind {
            ArtifactKind::Dockerfile => render_dockerfile(self.templates)?,
            ArtifactKind::Compose => render_compose(self.templates, config)?,
            ArtifactKind::SetupScript => render_setup_script(self.templates, config)?,
            ArtifactKind::Summary => render_summary(self.templates, config, host)?,
        };
        Ok(GeneratedArtifact::new(kind, content))
    }

    /// Render all artifacts in write order.
    pub fn generate_all(
        &self,
        config: &FleetConfig,
        host: &str,
    ) -> Result<Vec<GeneratedArtifact>, AppError> {
        ArtifactKind::ALL.into_iter().map(|kind| self.render(kind, config, host)).collect()
    }
}
