//! Shared testing harness for `mlfleet` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two teams on ports 6000/6001 sharing the password `secret`.
pub(crate) const SAMPLE_CONFIG: &str = r#"[teams]
team_list = ["alpha", "beta"]

[server]
base_port = 6000

[database]
local_password = "secret"
"#;

/// Every file a generation run writes.
pub(crate) const ARTIFACTS: [&str; 4] = ["Dockerfile", "docker-compose.yml", "setup.sh", "team_urls.md"];

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the CLI working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mlfleet` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mlfleet").expect("Failed to locate mlfleet binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write `config.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("config.toml", content)
    }

    /// Write the two-team sample configuration.
    pub(crate) fn write_sample_config(&self) -> PathBuf {
        self.write_config(SAMPLE_CONFIG)
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Assert that every artifact exists under `dir` (relative to the work directory).
    pub(crate) fn assert_artifacts_exist(&self, dir: &str) {
        for name in ARTIFACTS {
            let path = self.work_dir.join(dir).join(name);
            assert!(path.exists(), "{} should exist", path.display());
        }
    }

    /// Assert that no artifact exists under `dir` (relative to the work directory).
    pub(crate) fn assert_no_artifacts(&self, dir: &str) {
        for name in ARTIFACTS {
            let path = self.work_dir.join(dir).join(name);
            assert!(!path.exists(), "{} should not exist", path.display());
        }
    }
}
