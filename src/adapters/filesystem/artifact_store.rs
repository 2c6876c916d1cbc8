//! `ArtifactStore` implementation for `FilesystemStore`.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

use super::FilesystemStore;

impl ArtifactStore for FilesystemStore {
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms)?;
        }
        #[cfg(not(unix))]
        fs::metadata(&full_path)?;
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }
}
