//! Locale archive extraction.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use zip::ZipArchive;

use crate::config::ARCHIVE_PREFIX;
use crate::error::AppError;

/// What an extraction pass produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Files written under the target directory.
    pub files_written: usize,
    /// Language codes seen, sorted and deduplicated.
    pub languages: Vec<String>,
}

/// Extract archive entries under the locale prefix into `dest`.
///
/// Entry paths have the prefix stripped; existing files are overwritten, so
/// repeated extraction is idempotent. Parent directories are created before
/// each file write, independent of the archive's entry order.
pub fn extract_locales(bytes: &[u8], dest: &Path) -> Result<ExtractSummary, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut summary = ExtractSummary::default();
    let mut languages = BTreeSet::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.enclosed_name().is_none() {
            // Absolute or parent-traversing entry paths never leave `dest`.
            continue;
        }

        let name = entry.name().to_string();
        let Some(rel) = name.strip_prefix(ARCHIVE_PREFIX) else { continue };
        if rel.is_empty() {
            continue;
        }

        let target = dest.join(rel);
        if name.ends_with('/') {
            if !target.exists() {
                fs::create_dir_all(&target)?;
            }
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut output = fs::File::create(&target)?;
        io::copy(&mut entry, &mut output)?;

        summary.files_written += 1;
        if let Some((lang, _)) = rel.split_once('/') {
            languages.insert(lang.to_string());
        }
    }

    summary.languages = languages.into_iter().collect();
    Ok(summary)
}
