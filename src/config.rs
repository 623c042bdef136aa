//! Environment-derived configuration for the sync pipeline.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Crowdin project id for the Electrum client project.
pub const CROWDIN_PROJECT_ID: u64 = 20482;

/// Archive entries outside this prefix are ignored during extraction.
pub const ARCHIVE_PREFIX: &str = "electrum-client/locale/";

/// Translation file expected in each language directory.
pub const PO_FILE_NAME: &str = "electrum.po";

/// Commit message used by the commit step.
pub const COMMIT_MESSAGE: &str = "update translations";

/// Builds created more than this many days ago are rejected as stale.
pub const MAX_BUILD_AGE_DAYS: i64 = 2;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "crowdin_api_key";

/// Dotfile consulted when the environment variable is unset.
pub const API_KEY_DOTFILE: &str = ".crowdin_api_key";

/// Crowdin API endpoint configuration.
#[derive(Debug, Clone)]
pub struct CrowdinApiConfig {
    /// Versioned API base URL.
    pub api_base: String,
    /// Project whose translation builds are pulled.
    pub project_id: u64,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CrowdinApiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            project_id: CROWDIN_PROJECT_ID,
            timeout_secs: default_timeout(),
        }
    }
}

impl CrowdinApiConfig {
    /// Default configuration with the `CROWDIN_API_BASE` override applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = env::var("CROWDIN_API_BASE") {
            config.api_base = base;
        }
        config
    }
}

fn default_api_base() -> String {
    "https://api.crowdin.com/api/v2".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Resolve the Crowdin credential.
///
/// The environment variable wins; when it is unset, `~/.crowdin_api_key` is
/// read as trimmed text. Returns `None` when neither yields a non-empty value.
pub fn resolve_api_key() -> Option<String> {
    if let Ok(key) = env::var(API_KEY_ENV) {
        return if key.is_empty() { None } else { Some(key) };
    }

    let home = env::var("HOME").ok()?;
    let path = PathBuf::from(home).join(API_KEY_DOTFILE);
    let contents = fs::read_to_string(path).ok()?;
    let key = contents.trim();
    if key.is_empty() { None } else { Some(key.to_string()) }
}
