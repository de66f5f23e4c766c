use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway data directory for one test, standing in for the
/// platform data dir via TASKMASTER_DATA_DIR.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_tasks_file(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.tasks_file();
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_tasks_file(&self) -> std::io::Result<String> {
        fs::read_to_string(self.tasks_file())
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join("taskmaster.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// A bare `taskmaster` command with logging silenced; tests point it at
/// a TestDir themselves.
pub fn taskmaster_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskmaster").expect("taskmaster binary");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("TASKMASTER_DATA_DIR");
    cmd
}
