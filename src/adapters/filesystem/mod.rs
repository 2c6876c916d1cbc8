//! Filesystem adapter for the `ArtifactStore` port.

mod artifact_store;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at the output directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `path` onto the root after checking it names a location below it.
    ///
    /// Only plain relative components are accepted; `..`, `.`, and absolute
    /// or prefixed paths are rejected without touching the filesystem.
    fn checked_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(path);
        let plain = !path.is_empty()
            && relative.components().all(|component| matches!(component, Component::Normal(_)));
        if !plain {
            return Err(AppError::PathTraversal(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}
