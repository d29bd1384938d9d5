//! GitHub contents-API archive client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use zettel_core::{defaults, ArchiveStore, Error, Result};

/// User-Agent sent with every request (required by the GitHub API).
const USER_AGENT: &str = "zettel-archive";

/// Configuration for the archive client.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// API host.
    pub api_url: String,
    /// Personal access token.
    pub token: String,
    /// Repository in `owner/name` form.
    pub repo: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::ARCHIVE_API_URL.to_string(),
            token: String::new(),
            repo: String::new(),
            timeout_secs: defaults::ARCHIVE_TIMEOUT_SECS,
        }
    }
}

/// Archive store over the GitHub contents API.
///
/// Writes are upserts: an existence probe fetches the current blob sha,
/// which the update request must echo back.
#[derive(Debug)]
pub struct GitHubArchive {
    client: Client,
    config: ArchiveConfig,
}

#[derive(Deserialize)]
struct ContentsMeta {
    sha: String,
}

impl GitHubArchive {
    /// Create a new archive client with the given configuration.
    pub fn new(config: ArchiveConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config("archive token is empty".to_string()));
        }
        if config.repo.is_empty() {
            return Err(Error::Config("archive repository is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        info!(repo = %config.repo, "Initializing archive client");

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `GITHUB_TOKEN` | (required) | Personal access token |
    /// | `GITHUB_REPO` | (required) | `owner/name` repository |
    /// | `GITHUB_API_URL` | public API | Override for testing |
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN is not set".to_string()))?;
        let repo = std::env::var("GITHUB_REPO")
            .map_err(|_| Error::Config("GITHUB_REPO is not set".to_string()))?;
        let api_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| defaults::ARCHIVE_API_URL.to_string());

        Self::new(ArchiveConfig {
            api_url,
            token,
            repo,
            ..ArchiveConfig::default()
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.repo,
            path
        )
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("Authorization", format!("Bearer {}", self.config.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
    }

    /// Fetch the current blob sha for a path, if the file exists.
    async fn fetch_sha(&self, path: &str) -> Result<Option<String>> {
        let response = self
            .auth(self.client.get(self.contents_url(path)))
            .send()
            .await
            .map_err(|e| Error::Archive(format!("existence check failed: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let meta: ContentsMeta = response
                    .json()
                    .await
                    .map_err(|e| Error::Archive(format!("failed to parse contents: {}", e)))?;
                Ok(Some(meta.sha))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Archive(format!(
                    "existence check returned {}: {}",
                    status, body
                )))
            }
        }
    }
}

#[async_trait]
impl ArchiveStore for GitHubArchive {
    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.fetch_sha(path).await?.is_some())
    }

    async fn write(&self, path: &str, content: &str, message: &str) -> Result<()> {
        let sha = self.fetch_sha(path).await?;
        let updating = sha.is_some();

        let mut body = json!({
            "message": message,
            "content": base64::engine::general_purpose::STANDARD.encode(content),
        });
        if let Some(sha) = sha {
            body["sha"] = json!(sha);
        }

        let response = self
            .auth(self.client.put(self.contents_url(path)))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Archive(format!("write failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Archive(format!(
                "write returned {}: {}",
                status, text
            )));
        }

        debug!(path, updating, "Wrote archive file");
        Ok(())
    }
}
