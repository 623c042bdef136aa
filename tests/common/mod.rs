//! Shared testing utilities for locsync CLI tests.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write the credential dotfile under the emulated `$HOME`.
    pub fn write_api_key_dotfile(&self, key: &str) {
        fs::write(self.home().join(".crowdin_api_key"), key).expect("Failed to write dotfile");
    }

    /// Build a command for invoking the compiled `locsync` binary.
    ///
    /// `$HOME` points at the emulated home; the credential and API base start
    /// cleared so each test opts in explicitly.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("locsync").expect("Failed to locate locsync binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("crowdin_api_key")
            .env_remove("CROWDIN_API_BASE");
        cmd
    }

    /// Run git in the work directory, asserting success.
    pub fn git(&self, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Initialize a git repository with one seed commit in the work directory.
    pub fn init_git_repo(&self) {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.email", "tests@example.com"]);
        self.git(&["config", "user.name", "locsync tests"]);
        fs::write(self.work_dir.join(".gitkeep"), "").expect("Failed to seed repository");
        self.git(&["add", ".gitkeep"]);
        self.git(&["commit", "-q", "-m", "initial"]);
    }

    /// Number of commits on HEAD.
    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"]).parse().expect("Failed to parse commit count")
    }
}

/// Build an in-memory zip archive from `(path, payload)` pairs.
///
/// A `None` payload emits a directory entry.
#[allow(dead_code)]
pub fn zip_archive(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (path, payload) in entries {
        match payload {
            Some(bytes) => {
                writer.start_file(*path, options).expect("start zip entry");
                writer.write_all(bytes).expect("write zip entry");
            }
            None => {
                writer.add_directory(path.trim_end_matches('/'), options).expect("add zip dir");
            }
        }
    }

    writer.finish().expect("finish zip archive").into_inner()
}
