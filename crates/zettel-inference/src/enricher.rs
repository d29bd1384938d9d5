//! Metadata enrichment: truncation, backend invocation, output validation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use zettel_core::{defaults, AnalysisBackend, EnrichmentResult, Error, Result};

/// Enricher wrapping an analysis backend with the pipeline's input policy.
///
/// Input text is truncated to a fixed maximum length before submission.
/// This cost/latency control is lossy for long notes: only the head of
/// the note informs the generated metadata.
pub struct MetadataEnricher {
    backend: Arc<dyn AnalysisBackend>,
    max_input_chars: usize,
}

impl MetadataEnricher {
    /// Create an enricher over the given backend.
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            max_input_chars: defaults::ANALYSIS_INPUT_MAX_CHARS,
        }
    }

    /// Override the input truncation limit (default 3000 characters).
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }

    /// Derive enrichment metadata for a note body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Analysis`] when the backend fails or returns
    /// unusable output. Callers fall back to
    /// [`EnrichmentResult::fallback`] rather than aborting the run.
    #[instrument(skip(self, text, existing_tags), fields(input_len = text.len()))]
    pub async fn enrich(&self, text: &str, existing_tags: &[String]) -> Result<EnrichmentResult> {
        let truncated: String = text.chars().take(self.max_input_chars).collect();
        if truncated.len() < text.len() {
            debug!(
                limit = self.max_input_chars,
                "Truncated note text before analysis"
            );
        }

        self.backend.analyze(&truncated, existing_tags).await
    }
}

/// Parse and validate a backend JSON payload into an [`EnrichmentResult`].
///
/// The payload must be a JSON object carrying all four contract fields:
/// `title` and `summary` as strings, `tags` and `keywords` as string
/// arrays. Anything else is an [`Error::Analysis`].
pub fn parse_analysis_payload(payload: &str) -> Result<EnrichmentResult> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| Error::Analysis(format!("backend returned malformed JSON: {}", e)))?;

    let title = string_field(&value, "title")?;
    let summary = string_field(&value, "summary")?;
    let tags = string_array_field(&value, "tags")?;
    let keywords = string_array_field(&value, "keywords")?;

    Ok(EnrichmentResult {
        title: title.trim().to_string(),
        tags: normalize_list(tags),
        summary: summary.trim().to_string(),
        keywords: normalize_list(keywords),
    })
}

fn string_field(value: &Value, field: &str) -> Result<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::Analysis(format!("backend response missing field '{}'", field)))
}

fn string_array_field(value: &Value, field: &str) -> Result<Vec<String>> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .ok_or_else(|| Error::Analysis(format!("backend response missing field '{}'", field)))
}

fn normalize_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
