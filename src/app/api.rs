//! API Facade for the application.
//!
//! Wires the filesystem store, host resolver and embedded templates into an
//! `AppContext` and runs the generate command.

use std::path::{Path, PathBuf};

use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::host::ConfiguredHostResolverFactory;
use crate::adapters::templates::TemplateCatalog;
use crate::app::{AppContext, commands::generate};
use crate::domain::{ArtifactKind, CONFIG_FILE};

pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::domain::AppError;

/// Inputs for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Fleet configuration file.
    pub config_path: PathBuf,
    /// Directory receiving the generated files.
    pub output_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { config_path: PathBuf::from(CONFIG_FILE), output_dir: PathBuf::from(".") }
    }
}

fn create_context(
    output_dir: PathBuf,
) -> Result<AppContext<FilesystemStore, ConfiguredHostResolverFactory>, AppError> {
    Ok(AppContext::new(
        FilesystemStore::new(output_dir),
        ConfiguredHostResolverFactory,
        TemplateCatalog::embedded()?,
    ))
}

/// Generate all artifacts as described by `options`.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(options.output_dir.clone())?;
    generate::execute(&ctx, &options.config_path)
}

/// Generate all artifacts, calling `on_written` after each file is written.
///
/// Files reported before an error stay on disk.
pub fn generate_with(
    options: &GenerateOptions,
    on_written: impl FnMut(ArtifactKind, &Path),
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(options.output_dir.clone())?;
    generate::execute_with(&ctx, &options.config_path, on_written)
}

/// Generate all artifacts from `config_path` into `output_dir`.
pub fn generate_at(
    config_path: impl AsRef<Path>,
    output_dir: impl Into<PathBuf>,
) -> Result<GenerateOutcome, AppError> {
    let options =
        GenerateOptions { config_path: config_path.as_ref().to_path_buf(), output_dir: output_dir.into() };
    generate(&options)
}
