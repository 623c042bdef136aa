//! Translation build descriptor.

use chrono::{DateTime, Duration, Utc};

use crate::config::MAX_BUILD_AGE_DAYS;

/// Status Crowdin reports once a build has finished generating.
pub const FINISHED_STATUS: &str = "finished";

/// A translation build as reported by the builds listing.
#[derive(Debug, Clone)]
pub struct TranslationBuild {
    /// Build identifier.
    pub id: u64,
    /// Generation status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TranslationBuild {
    pub fn is_finished(&self) -> bool {
        self.status == FINISHED_STATUS
    }

    /// Whether the build falls outside the staleness window at `now`.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > Duration::days(MAX_BUILD_AGE_DAYS)
    }
}
