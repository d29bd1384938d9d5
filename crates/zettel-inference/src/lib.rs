//! # zettel-inference
//!
//! Text-analysis backend abstraction for the zettel pipeline.
//!
//! This crate provides:
//! - An OpenAI-compatible chat-completions implementation of the
//!   [`AnalysisBackend`](zettel_core::AnalysisBackend) trait
//! - The [`MetadataEnricher`] wrapping any backend with input truncation
//!   and output validation
//! - A mock backend for deterministic tests (feature `mock`)
//!
//! # Feature Flags
//!
//! - `mock`: Expose [`mock::MockAnalysisBackend`] to downstream test suites

pub mod backend;
pub mod enricher;
pub mod prompt;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use zettel_core::*;

pub use backend::{ChatBackend, ChatConfig};
pub use enricher::{parse_analysis_payload, MetadataEnricher};
