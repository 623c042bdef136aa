use std::io;

use thiserror::Error;

/// Library-wide error type for locsync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No credential in the environment or the home dotfile.
    #[error("missing required crowdin_api_key")]
    MissingApiKey,

    /// The builds listing came back empty.
    #[error("no translation builds are available")]
    NoBuilds,

    /// Latest build has not finished generating.
    #[error("latest translation build {id} is not finished (status '{status}')")]
    BuildNotFinished { id: u64, status: String },

    /// Latest build is older than the staleness window.
    #[error("latest translation build looks too old (created at {created_at})")]
    BuildTooOld { created_at: String },

    /// Network request could not be performed.
    #[error("request to {url} failed: {details}")]
    Request { url: String, details: String },

    /// Network request completed with a non-success status.
    #[error("request to {url} failed with status {status}")]
    RequestStatus { url: String, status: u16 },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Archive could not be read.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
