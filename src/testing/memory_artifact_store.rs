use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store recording writes in order.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: RefCell<BTreeMap<String, String>>,
    executables: RefCell<BTreeSet<String>>,
    write_log: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `path` fail with a permission error.
    pub fn failing_on(path: &str) -> Self {
        Self { fail_on: Some(path.to_string()), ..Self::default() }
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn is_executable(&self, path: &str) -> bool {
        self.executables.borrow().contains(path)
    }

    pub fn write_log(&self) -> Vec<String> {
        self.write_log.borrow().clone()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into());
        }
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self.write_log.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        if !self.files.borrow().contains_key(path) {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()).into());
        }
        self.executables.borrow_mut().insert(path.to_string());
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
