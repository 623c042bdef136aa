//! locsync: pull finished Crowdin translation builds into the local locale tree.

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use commands::{commit, pull};
use config::CrowdinApiConfig;
use services::{GitCommandAdapter, HttpCrowdinClient};

pub use commands::pull::PullOutcome;
pub use error::AppError;

/// Pull the latest finished translation build into `dest`.
///
/// When `api_key` is `None` the credential is resolved from the environment
/// or `~/.crowdin_api_key`; absence of both is a hard failure.
pub fn pull(dest: &Path, api_key: Option<&str>) -> Result<PullOutcome, AppError> {
    let api_key = match api_key {
        Some(key) => key.to_string(),
        None => config::resolve_api_key().ok_or(AppError::MissingApiKey)?,
    };

    let client = HttpCrowdinClient::new(api_key, &CrowdinApiConfig::from_env())?;
    pull::execute(&client, dest)
}

/// Stage the refreshed translation files under `locale_dir` and commit them.
///
/// Returns the number of staged translation files.
pub fn commit(repo_root: &Path, locale_dir: &Path) -> Result<usize, AppError> {
    let git = GitCommandAdapter::new(repo_root.to_path_buf());
    commit::execute(&git, repo_root, locale_dir)
}
