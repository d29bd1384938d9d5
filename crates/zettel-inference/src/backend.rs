//! OpenAI-compatible analysis backend implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use zettel_core::{defaults, AnalysisBackend, EnrichmentResult, Error, Result};

use crate::enricher::parse_analysis_payload;
use crate::prompt::{analysis_prompt, SYSTEM_PROMPT};

/// Configuration for the chat-completions analysis backend.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication (optional for local endpoints).
    pub api_key: Option<String>,
    /// Model used for analysis.
    pub model: String,
    /// Sampling temperature (kept low for determinism).
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::ANALYSIS_URL.to_string(),
            api_key: None,
            model: defaults::ANALYSIS_MODEL.to_string(),
            temperature: defaults::ANALYSIS_TEMPERATURE,
            timeout_secs: defaults::ANALYSIS_TIMEOUT_SECS,
        }
    }
}

/// Analysis backend over an OpenAI-compatible chat-completions API.
pub struct ChatBackend {
    client: Client,
    config: ChatConfig,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ChatBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initializing analysis backend"
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ChatConfig::default())
    }

    /// Create from environment variables.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `OPENAI_BASE_URL` | public API | API endpoint |
    /// | `OPENAI_API_KEY` | (none) | Bearer token |
    /// | `OPENAI_MODEL` | `gpt-4o-mini` | Analysis model |
    /// | `OPENAI_TIMEOUT` | 120 | Request timeout (seconds) |
    pub fn from_env() -> Result<Self> {
        let config = ChatConfig {
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| defaults::ANALYSIS_URL.to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| defaults::ANALYSIS_MODEL.to_string()),
            temperature: defaults::ANALYSIS_TEMPERATURE,
            timeout_secs: std::env::var("OPENAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::ANALYSIS_TIMEOUT_SECS),
        };

        Self::new(config)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req.header("Content-Type", "application/json")
    }
}

#[async_trait]
impl AnalysisBackend for ChatBackend {
    async fn analyze(&self, text: &str, existing_tags: &[String]) -> Result<EnrichmentResult> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: analysis_prompt(text, existing_tags),
                },
            ],
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        debug!(
            model = %self.config.model,
            input_len = text.len(),
            "Requesting note analysis"
        );

        let response = self
            .build_request("/chat/completions")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Analysis(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Analysis(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Analysis(format!("failed to parse response: {}", e)))?;

        let content = result
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| Error::Analysis("backend returned no choices".to_string()))?;

        parse_analysis_payload(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, defaults::ANALYSIS_URL);
        assert_eq!(config.model, defaults::ANALYSIS_MODEL);
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_request_serialization_shape() {
        let request = ChatRequest {
            model: "test".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hi".to_string(),
            }],
            temperature: 0.3,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
