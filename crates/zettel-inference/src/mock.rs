//! Mock analysis backend for deterministic testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use zettel_core::{AnalysisBackend, EnrichmentResult, Error, Result};

/// Mock analysis backend for testing.
#[derive(Clone)]
pub struct MockAnalysisBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Clone)]
struct MockConfig {
    default_result: EnrichmentResult,
    mapped_results: HashMap<String, EnrichmentResult>,
    fail: bool,
}

/// One recorded call to the mock backend.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub text: String,
    pub existing_tags: Vec<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            default_result: EnrichmentResult {
                title: "Mock title".to_string(),
                tags: vec!["mock".to_string()],
                summary: "Mock summary".to_string(),
                keywords: vec!["mock".to_string()],
            },
            mapped_results: HashMap::new(),
            fail: false,
        }
    }
}

impl MockAnalysisBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the result returned for any unmapped input.
    pub fn with_result(mut self, result: EnrichmentResult) -> Self {
        Arc::make_mut(&mut self.config).default_result = result;
        self
    }

    /// Map a specific input text to a result.
    pub fn with_result_mapping(mut self, text: impl Into<String>, result: EnrichmentResult) -> Self {
        Arc::make_mut(&mut self.config)
            .mapped_results
            .insert(text.into(), result);
        self
    }

    /// Make every call fail with an analysis error.
    pub fn with_failure(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail = true;
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of analyze calls made.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

impl Default for MockAnalysisBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisBackend for MockAnalysisBackend {
    async fn analyze(&self, text: &str, existing_tags: &[String]) -> Result<EnrichmentResult> {
        self.call_log.lock().unwrap().push(MockCall {
            text: text.to_string(),
            existing_tags: existing_tags.to_vec(),
        });

        if self.config.fail {
            return Err(Error::Analysis("simulated backend failure".to_string()));
        }

        if let Some(result) = self.config.mapped_results.get(text) {
            return Ok(result.clone());
        }

        Ok(self.config.default_result.clone())
    }
}
