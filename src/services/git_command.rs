use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::AppError;
use crate::ports::GitPort;

/// `GitPort` implementation shelling out to the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let output = Command::new("git").args(args).current_dir(&self.root).output().map_err(
            |e| AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: e.to_string(),
            },
        )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitPort for GitCommandAdapter {
    fn stage(&self, path: &Path) -> Result<(), AppError> {
        let path_str = path.to_string_lossy();
        self.run(&["add", path_str.as_ref()])?;
        Ok(())
    }

    fn commit_all(&self, message: &str) -> Result<(), AppError> {
        self.run(&["commit", "-a", "-m", message])?;
        Ok(())
    }
}
