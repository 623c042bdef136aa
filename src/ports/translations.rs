//! Translation service port definition.

use crate::domain::TranslationBuild;
use crate::error::AppError;

/// Port for the translation-management service.
pub trait TranslationsApi {
    /// Most recent translation build for the configured project.
    fn latest_build(&self) -> Result<TranslationBuild, AppError>;

    /// Request a one-time download URL for a build.
    fn request_download_url(&self, build_id: u64) -> Result<String, AppError>;

    /// Download the archive at `url`. The URL is pre-signed, so the request
    /// carries no authentication.
    fn fetch_archive(&self, url: &str) -> Result<Vec<u8>, AppError>;
}
