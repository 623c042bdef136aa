//! Commit command: stage refreshed translation files and commit them.

use std::fs;
use std::path::Path;

use crate::config::{COMMIT_MESSAGE, PO_FILE_NAME};
use crate::error::AppError;
use crate::ports::GitPort;

/// Stage the translation file of every language directory under `locale_dir`
/// and create a single commit covering the staged changes.
///
/// Staged paths are relative to `repo_root`. Returns the number of staged
/// translation files.
pub fn execute<G: GitPort>(
    git: &G,
    repo_root: &Path,
    locale_dir: &Path,
) -> Result<usize, AppError> {
    let mut languages: Vec<String> = Vec::new();
    for entry in fs::read_dir(locale_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            languages.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    languages.sort();

    let rel_locale = locale_dir.strip_prefix(repo_root).unwrap_or(locale_dir);

    let mut staged = 0;
    for lang in &languages {
        if !locale_dir.join(lang).join(PO_FILE_NAME).is_file() {
            continue;
        }
        git.stage(&rel_locale.join(lang).join(PO_FILE_NAME))?;
        staged += 1;
    }

    git.commit_all(COMMIT_MESSAGE)?;
    Ok(staged)
}
