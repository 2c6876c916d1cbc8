//! Generate command: config in, deployment artifacts out.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::app::services::{ArtifactGenerator, resolve_host};
use crate::domain::{AppError, ArtifactKind};
use crate::ports::{ArtifactStore, HostResolverFactory};

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Written files, in write order.
    pub written: Vec<PathBuf>,
    /// Host used in the team URLs.
    pub host: String,
    /// Number of configured teams.
    pub teams: usize,
}

/// Load the configuration at `config_path` and write every artifact to the
/// context's store.
pub fn execute<S, F>(ctx: &AppContext<S, F>, config_path: &Path) -> Result<GenerateOutcome, AppError>
where
    S: ArtifactStore,
    F: HostResolverFactory,
{
    execute_with(ctx, config_path, |_, _| {})
}

/// Like [`execute`], calling `on_written` as soon as each artifact is on disk.
///
/// Nothing is written unless loading, host resolution and rendering all
/// succeed. A write failure aborts the run without removing files already
/// written; those files have already been reported through `on_written`.
pub fn execute_with<S, F, W>(
    ctx: &AppContext<S, F>,
    config_path: &Path,
    mut on_written: W,
) -> Result<GenerateOutcome, AppError>
where
    S: ArtifactStore,
    F: HostResolverFactory,
    W: FnMut(ArtifactKind, &Path),
{
    let config = load_config(config_path)?;

    let resolver = ctx.resolvers().create(&config.host)?;
    let host = resolve_host(resolver.as_ref(), config.host.fallback_host())?;

    let artifacts = ArtifactGenerator::new(ctx.templates()).generate_all(&config, &host)?;
    debug!(count = artifacts.len(), "rendered artifacts");

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        ctx.store().write_file(artifact.path(), &artifact.content)?;
        if artifact.kind.is_executable() {
            ctx.store().set_executable(artifact.path())?;
        }
        info!(file = artifact.path(), bytes = artifact.content.len(), "wrote artifact");
        let path = ctx.store().resolve_path(artifact.path());
        on_written(artifact.kind, &path);
        written.push(path);
    }

    Ok(GenerateOutcome { written, host, teams: config.teams.team_list.len() })
}
