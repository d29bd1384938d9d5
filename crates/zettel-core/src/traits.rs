//! Collaborator interfaces consumed by the pipeline.
//!
//! These traits define the three external seams (document store, analysis
//! backend, archive store), enabling pluggable implementations and
//! testability. The concrete clients live in their own crates; the pipeline
//! only sees these interfaces.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AppendBlock, ContentBlock, EnrichmentResult, Note, NoteFilter, NoteUpdate};

/// Remote structured document store holding the notes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List notes, optionally filtered. Implementations page through the
    /// full result set and apply the configured inter-page pacing delay.
    async fn list_notes(&self, filter: Option<NoteFilter>) -> Result<Vec<Note>>;

    /// Fetch a note's ordered content blocks.
    async fn get_blocks(&self, note_id: &str) -> Result<Vec<ContentBlock>>;

    /// Update a note's title/tags/status/processed-flag fields.
    async fn update_note(&self, note_id: &str, update: NoteUpdate) -> Result<()>;

    /// Append blocks to the end of a note's body.
    async fn append_blocks(&self, note_id: &str, blocks: Vec<AppendBlock>) -> Result<()>;
}

/// Opaque text-analysis backend: text in, structured metadata out.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Analyze note text and return enrichment metadata.
    ///
    /// `existing_tags` lets the backend reuse the note's current tags where
    /// topically appropriate. Malformed output must surface as
    /// [`Error::Analysis`](crate::Error::Analysis) so callers can fall back
    /// to default metadata.
    async fn analyze(&self, text: &str, existing_tags: &[String]) -> Result<EnrichmentResult>;
}

/// Version-controlled file archive mirroring enriched notes.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Whether a file already exists at `path`.
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Create or update the file at `path` with the given commit message.
    async fn write(&self, path: &str, content: &str, message: &str) -> Result<()>;
}
