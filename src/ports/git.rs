use std::path::Path;

use crate::error::AppError;

/// Port for the version-control staging step.
pub trait GitPort {
    /// Stage a single path.
    fn stage(&self, path: &Path) -> Result<(), AppError>;

    /// Commit staged and tracked changes with `message`.
    fn commit_all(&self, message: &str) -> Result<(), AppError>;
}
