//! Upstream profile source — fetches the raw record for a public identifier.
//!
//! The page is always rendered from a fresh record: requests carry
//! `Cache-Control: no-store` and nothing is cached on this side. Unknown
//! identifiers and upstream failures are distinct errors here, but the page
//! handler treats both as "profile not found".

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::models::profile::ProfileRecord;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("profile not found")]
    NotFound,

    #[error("upstream error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn get_profile(&self, identifier: &str) -> Result<ProfileRecord, SourceError>;
}

/// Fetches records from the profile data API over HTTP.
pub struct HttpProfileSource {
    base_url: String,
    http: reqwest::Client,
}

impl HttpProfileSource {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        HttpProfileSource {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn get_profile(&self, identifier: &str) -> Result<ProfileRecord, SourceError> {
        let url = format!("{}/api/get-user-data/{identifier}", self.base_url);
        debug!("Fetching profile record: {url}");

        let response = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| SourceError::Upstream(format!("request failed: {e}")))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(SourceError::NotFound),
            status if !status.is_success() => {
                Err(SourceError::Upstream(format!("unexpected status {status}")))
            }
            _ => response
                .json::<ProfileRecord>()
                .await
                .map_err(|e| SourceError::Upstream(format!("malformed record: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let source = HttpProfileSource::new("https://upstream.example/", reqwest::Client::new());
        assert_eq!(source.base_url, "https://upstream.example");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SourceError::NotFound.to_string(), "profile not found");
        assert_eq!(
            SourceError::Upstream("unexpected status 500".to_string()).to_string(),
            "upstream error: unexpected status 500"
        );
    }
}
