//! # zettel-store
//!
//! Remote document store client for the zettel pipeline.
//!
//! This crate provides:
//! - A Notion-style HTTP client implementing the
//!   [`DocumentStore`](zettel_core::DocumentStore) trait
//! - Cursor pagination with fixed inter-page pacing
//! - A typed parsing boundary converting raw store payloads into
//!   [`Note`](zettel_core::Note)/[`ContentBlock`](zettel_core::ContentBlock)
//!   values at the collaborator seam

pub mod client;
pub mod parse;

// Re-export core types
pub use zettel_core::*;

pub use client::{NotionStore, StoreConfig};
