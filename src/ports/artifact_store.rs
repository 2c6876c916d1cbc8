//! Output-directory filesystem operations.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for writing generated artifacts.
///
/// All `path` arguments are relative to the output directory.
/// Implementations must reject paths that escape the directory.
pub trait ArtifactStore {
    /// Write UTF-8 content to a file, creating parent directories as needed.
    /// Existing files are overwritten.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Set owner rwx, group/other rx (0o755) on a file. Off Unix only
    /// existence is checked.
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to a path within the output directory.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
