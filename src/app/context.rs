use crate::adapters::templates::TemplateCatalog;
use crate::ports::{ArtifactStore, HostResolverFactory};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, F: HostResolverFactory> {
    store: S,
    resolvers: F,
    templates: TemplateCatalog,
}

impl<S: ArtifactStore, F: HostResolverFactory> AppContext<S, F> {
    /// Create a new application context.
    pub fn new(store: S, resolvers: F, templates: TemplateCatalog) -> Self {
        Self { store, resolvers, templates }
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the host resolver factory.
    pub fn resolvers(&self) -> &F {
        &self.resolvers
    }

    /// Get a reference to the embedded templates.
    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }
}
