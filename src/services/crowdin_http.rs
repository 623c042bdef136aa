//! Crowdin API client implementation using reqwest.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::CrowdinApiConfig;
use crate::domain::TranslationBuild;
use crate::error::AppError;
use crate::ports::TranslationsApi;

/// HTTP client for the Crowdin v2 API.
#[derive(Clone)]
pub struct HttpCrowdinClient {
    api_key: String,
    api_base: Url,
    project_id: u64,
    client: Client,
}

impl std::fmt::Debug for HttpCrowdinClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCrowdinClient")
            .field("api_base", &self.api_base)
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCrowdinClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CrowdinApiConfig) -> Result<Self, AppError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| AppError::config_error(format!("Invalid API base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_base, project_id: config.project_id, client })
    }

    fn builds_url(&self) -> String {
        format!(
            "{}/projects/{}/translations/builds",
            self.api_base.as_str().trim_end_matches('/'),
            self.project_id
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| AppError::Request { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RequestStatus { url: url.to_string(), status: status.as_u16() });
        }

        response.json().map_err(|e| AppError::ParseError {
            what: "API response".to_string(),
            details: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct BuildListResponse {
    data: Vec<BuildEnvelope>,
}

#[derive(Debug, Deserialize)]
struct BuildEnvelope {
    data: BuildAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildAttributes {
    id: u64,
    status: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct DownloadResponse {
    data: DownloadTarget,
}

#[derive(Debug, Deserialize)]
struct DownloadTarget {
    url: String,
}

impl TranslationsApi for HttpCrowdinClient {
    fn latest_build(&self) -> Result<TranslationBuild, AppError> {
        let url = self.builds_url();
        let list: BuildListResponse = self.get_json(&url)?;

        // Builds come back newest first.
        let latest = list.data.into_iter().next().ok_or(AppError::NoBuilds)?.data;

        let created_at = DateTime::parse_from_rfc3339(&latest.created_at)
            .map_err(|e| AppError::ParseError {
                what: "build creation timestamp".to_string(),
                details: format!("Value: '{}', Error: {}", latest.created_at, e),
            })?
            .with_timezone(&Utc);

        Ok(TranslationBuild { id: latest.id, status: latest.status, created_at })
    }

    fn request_download_url(&self, build_id: u64) -> Result<String, AppError> {
        let url = format!("{}/{}/download", self.builds_url(), build_id);
        let download: DownloadResponse = self.get_json(&url)?;
        Ok(download.data.url)
    }

    fn fetch_archive(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Request { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RequestStatus { url: url.to_string(), status: status.as_u16() });
        }

        let bytes = response
            .bytes()
            .map_err(|e| AppError::Request { url: url.to_string(), details: e.to_string() })?;
        Ok(bytes.to_vec())
    }
}
