//! Pull command: fetch the latest translation build and extract it.

use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::error::AppError;
use crate::ports::TranslationsApi;
use crate::services::archive::{self, ExtractSummary};

/// Result of a completed pull.
#[derive(Debug)]
pub struct PullOutcome {
    /// Identifier of the build that was downloaded.
    pub build_id: u64,
    /// Files written under the locale tree.
    pub files_written: usize,
    /// Language codes seen during extraction.
    pub languages: Vec<String>,
}

/// Execute the pull pipeline into `dest`.
///
/// The latest build must be finished and fresh before any download is
/// attempted. Extraction leaves whatever it has written behind on failure.
pub fn execute<C: TranslationsApi>(client: &C, dest: &Path) -> Result<PullOutcome, AppError> {
    println!("Getting list of builds from crowdin...");
    let build = client.latest_build()?;
    if !build.is_finished() {
        return Err(AppError::BuildNotFinished { id: build.id, status: build.status });
    }
    if build.is_stale_at(Utc::now()) {
        return Err(AppError::BuildTooOld { created_at: build.created_at.to_rfc3339() });
    }

    println!("Asking crowdin to generate a URL for the latest build...");
    let url = client.request_download_url(build.id)?;

    println!("Downloading translations...");
    let bytes = client.fetch_archive(&url)?;

    println!("Unzipping translations...");
    fs::create_dir_all(dest)?;
    let ExtractSummary { files_written, languages } = archive::extract_locales(&bytes, dest)?;

    Ok(PullOutcome { build_id: build.id, files_written, languages })
}
