//! Common test utilities for berks-lock integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace holding a Berksfile and its lockfile
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Path to the workspace Berksfile
    pub fn manifest(&self) -> PathBuf {
        self.path.join("Berksfile")
    }

    /// Path to the workspace Berksfile.lock
    pub fn lockfile(&self) -> PathBuf {
        self.path.join("Berksfile.lock")
    }

    /// Write the Berksfile
    pub fn write_manifest(&self, content: &str) {
        std::fs::write(self.manifest(), content).expect("Failed to write Berksfile");
    }

    /// Write the lockfile verbatim
    pub fn write_lockfile(&self, content: &str) {
        std::fs::write(self.lockfile(), content).expect("Failed to write Berksfile.lock");
    }

    /// Read the lockfile
    pub fn read_lockfile(&self) -> String {
        std::fs::read_to_string(self.lockfile()).expect("Failed to read Berksfile.lock")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// berks-lock command isolated from the caller's environment
#[allow(deprecated)]
pub fn berks_lock_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("berks-lock").expect("berks-lock binary should be built");
    cmd.current_dir(&workspace.path)
        .env_remove("BERKS_MANIFEST")
        .env_remove("RUST_LOG");
    cmd
}
