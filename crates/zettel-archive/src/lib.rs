//! # zettel-archive
//!
//! Archival rendering and version-controlled archive client for the zettel
//! pipeline.
//!
//! This crate provides:
//! - Markdown rendering of enriched notes (front matter, body, backlinks)
//! - Deterministic archive pathing from creation date and sanitized title
//! - A GitHub contents-API implementation of the
//!   [`ArchiveStore`](zettel_core::ArchiveStore) trait with upsert writes

pub mod github;
pub mod path;
pub mod render;

// Re-export core types
pub use zettel_core::*;

pub use github::{ArchiveConfig, GitHubArchive};
pub use path::archive_path;
pub use render::render_document;
