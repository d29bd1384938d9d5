//! Notion-style document store client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tokio::time::sleep;
use tracing::{debug, info};

use zettel_core::{
    defaults, AppendBlock, ContentBlock, DocumentStore, Error, Note, NoteFilter, NoteUpdate,
    Result,
};

use crate::parse::{
    parse_block, parse_note, PageEnvelope, PROP_AI_PROCESSED, PROP_STATUS, PROP_TAGS, PROP_TITLE,
};

/// Configuration for the document store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store API.
    pub base_url: String,
    /// Integration token used as bearer auth.
    pub token: String,
    /// Database holding the notes.
    pub database_id: String,
    /// Page size for listing requests.
    pub page_size: usize,
    /// Fixed delay inserted after each paginated listing call.
    pub page_delay: Duration,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::STORE_URL.to_string(),
            token: String::new(),
            database_id: String::new(),
            page_size: defaults::STORE_PAGE_SIZE,
            page_delay: Duration::from_millis(defaults::PAGE_DELAY_MS),
            timeout_secs: defaults::STORE_TIMEOUT_SECS,
        }
    }
}

/// Document store client over the Notion HTTP API.
#[derive(Debug)]
pub struct NotionStore {
    client: Client,
    config: StoreConfig,
}

impl NotionStore {
    /// Create a new store client with the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config("document store token is empty".to_string()));
        }
        if config.database_id.is_empty() {
            return Err(Error::Config(
                "document store database id is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            database_id = %config.database_id,
            "Initializing document store client"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `NOTION_TOKEN` | (required) | Integration token |
    /// | `NOTION_DATABASE_ID` | (required) | Notes database |
    /// | `NOTION_BASE_URL` | public API | Override for testing |
    /// | `ZETTEL_PAGE_DELAY_MS` | 300 | Inter-page pacing delay |
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("NOTION_TOKEN")
            .map_err(|_| Error::Config("NOTION_TOKEN is not set".to_string()))?;
        let database_id = std::env::var("NOTION_DATABASE_ID")
            .map_err(|_| Error::Config("NOTION_DATABASE_ID is not set".to_string()))?;
        let base_url =
            std::env::var("NOTION_BASE_URL").unwrap_or_else(|_| defaults::STORE_URL.to_string());
        let page_delay_ms = std::env::var("ZETTEL_PAGE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::PAGE_DELAY_MS);

        Self::new(StoreConfig {
            base_url,
            token,
            database_id,
            page_delay: Duration::from_millis(page_delay_ms),
            ..StoreConfig::default()
        })
    }

    /// Get the current configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("Authorization", format!("Bearer {}", self.config.token))
            .header("Notion-Version", defaults::STORE_API_VERSION)
            .header("Content-Type", "application/json")
    }

    async fn check(&self, response: reqwest::Response, op: &str) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(Error::Store(format!(
            "{} returned {}: {}",
            op, status, body
        )))
    }

    fn filter_body(filter: NoteFilter) -> Value {
        match filter {
            NoteFilter::Unprocessed => json!({
                "or": [
                    {"property": PROP_STATUS, "select": {"equals": "unprocessed"}},
                    {"property": PROP_AI_PROCESSED, "checkbox": {"equals": false}}
                ]
            }),
        }
    }

    fn render_append_block(block: &AppendBlock) -> Value {
        match block {
            AppendBlock::Divider => json!({
                "object": "block",
                "type": "divider",
                "divider": {}
            }),
            AppendBlock::Heading(text) => json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {
                    "rich_text": [{"type": "text", "text": {"content": text}}]
                }
            }),
            AppendBlock::Reference { note_id } => json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [
                        {"type": "text", "text": {"content": "→ "}},
                        {"type": "mention", "mention": {"type": "page", "page": {"id": note_id}}}
                    ]
                }
            }),
        }
    }
}

#[async_trait]
impl DocumentStore for NotionStore {
    async fn list_notes(&self, filter: Option<NoteFilter>) -> Result<Vec<Note>> {
        let endpoint = format!("/databases/{}/query", self.config.database_id);
        let mut notes = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({ "page_size": self.config.page_size });
            if let Some(ref c) = cursor {
                body["start_cursor"] = json!(c);
            }
            if let Some(f) = filter {
                body["filter"] = Self::filter_body(f);
            }

            let response = self
                .auth(self.client.post(self.url(&endpoint)))
                .json(&body)
                .send()
                .await
                .map_err(|e| Error::Store(format!("list request failed: {}", e)))?;
            let response = self.check(response, "list_notes").await?;

            let envelope: PageEnvelope = response
                .json()
                .await
                .map_err(|e| Error::Store(format!("failed to parse list response: {}", e)))?;

            for payload in &envelope.results {
                notes.push(parse_note(payload)?);
            }

            debug!(
                page_results = envelope.results.len(),
                total = notes.len(),
                has_more = envelope.has_more,
                "Fetched listing page"
            );

            // Fixed pacing delay after every paginated listing call.
            sleep(self.config.page_delay).await;

            if !envelope.has_more {
                break;
            }
            cursor = envelope.next_cursor;
            if cursor.is_none() {
                break;
            }
        }

        Ok(notes)
    }

    async fn get_blocks(&self, note_id: &str) -> Result<Vec<ContentBlock>> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = format!(
                "{}?page_size={}",
                self.url(&format!("/blocks/{}/children", note_id)),
                self.config.page_size
            );
            if let Some(ref c) = cursor {
                url.push_str(&format!("&start_cursor={}", c));
            }

            let response = self
                .auth(self.client.get(url))
                .send()
                .await
                .map_err(|e| Error::Store(format!("blocks request failed: {}", e)))?;
            let response = self.check(response, "get_blocks").await?;

            let envelope: PageEnvelope = response
                .json()
                .await
                .map_err(|e| Error::Store(format!("failed to parse blocks response: {}", e)))?;

            for payload in &envelope.results {
                blocks.push(parse_block(payload)?);
            }

            if !envelope.has_more {
                break;
            }
            cursor = envelope.next_cursor;
            if cursor.is_none() {
                break;
            }
        }

        Ok(blocks)
    }

    async fn update_note(&self, note_id: &str, update: NoteUpdate) -> Result<()> {
        let tags: Vec<Value> = update.tags.iter().map(|t| json!({"name": t})).collect();
        let body = json!({
            "properties": {
                PROP_TITLE: {"title": [{"text": {"content": update.title}}]},
                PROP_TAGS: {"multi_select": tags},
                PROP_STATUS: {"select": {"name": update.status.to_string()}},
                PROP_AI_PROCESSED: {"checkbox": update.ai_processed}
            }
        });

        let response = self
            .auth(self.client.patch(self.url(&format!("/pages/{}", note_id))))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Store(format!("update request failed: {}", e)))?;
        self.check(response, "update_note").await?;

        debug!(note_id, "Updated note properties");
        Ok(())
    }

    async fn append_blocks(&self, note_id: &str, blocks: Vec<AppendBlock>) -> Result<()> {
        if blocks.is_empty() {
            return Ok(());
        }

        let children: Vec<Value> = blocks.iter().map(Self::render_append_block).collect();
        let body = json!({ "children": children });

        let response = self
            .auth(
                self.client
                    .patch(self.url(&format!("/blocks/{}/children", note_id))),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Store(format!("append request failed: {}", e)))?;
        self.check(response, "append_blocks").await?;

        debug!(note_id, appended = blocks.len(), "Appended blocks");
        Ok(())
    }
}
