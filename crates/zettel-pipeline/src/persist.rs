//! Note persistence: apply enrichment to the store and mirror to the archive.
//!
//! The two side effects are independent and non-transactional. Each failure
//! surfaces with its own error variant (`Store` vs `Archive`) so the
//! orchestrator reports them separately; a store failure for a note skips
//! its archive write.

use std::sync::Arc;

use tracing::{debug, instrument};

use zettel_archive::{archive_path, render_document};
use zettel_core::{
    defaults, AppendBlock, ArchiveStore, BlockKind, ContentBlock, DocumentStore, EnrichmentResult,
    Note, NoteStatus, NoteUpdate, RelatedNote, Result,
};

/// Applies enrichment results back to the document store and renders the
/// archival document.
pub struct NotePersister {
    store: Arc<dyn DocumentStore>,
    archive: Arc<dyn ArchiveStore>,
    archive_dir: String,
}

impl NotePersister {
    /// Create a persister over the given collaborators.
    pub fn new(store: Arc<dyn DocumentStore>, archive: Arc<dyn ArchiveStore>) -> Self {
        Self {
            store,
            archive,
            archive_dir: defaults::ARCHIVE_DIR.to_string(),
        }
    }

    /// Override the archive directory (default `vault`).
    pub fn with_archive_dir(mut self, dir: impl Into<String>) -> Self {
        self.archive_dir = dir.into();
        self
    }

    /// Update the note's fields and append the backlink section.
    ///
    /// The backlink append is guarded: if the note already has a heading
    /// containing the related-section marker, nothing is appended, so
    /// reprocessing never duplicates the section.
    #[instrument(skip_all, fields(note_id = %note.id))]
    pub async fn apply_to_store(
        &self,
        note: &Note,
        result: &EnrichmentResult,
        related: &[RelatedNote],
    ) -> Result<()> {
        self.store
            .update_note(
                &note.id,
                NoteUpdate {
                    title: result.title.clone(),
                    tags: result.tags.clone(),
                    status: NoteStatus::Processed,
                    ai_processed: true,
                },
            )
            .await?;

        if related.is_empty() {
            return Ok(());
        }

        let blocks = self.store.get_blocks(&note.id).await?;
        if has_related_section(&blocks) {
            debug!("Backlink section already present, skipping append");
            return Ok(());
        }

        let mut children = vec![
            AppendBlock::Divider,
            AppendBlock::Heading(defaults::RELATED_SECTION_HEADING.to_string()),
        ];
        children.extend(related.iter().map(|candidate| AppendBlock::Reference {
            note_id: candidate.id.clone(),
        }));

        self.store.append_blocks(&note.id, children).await?;
        debug!(related = related.len(), "Appended backlink section");
        Ok(())
    }

    /// Render the archival document and upsert it into the archive.
    ///
    /// Returns the archive path that was written.
    #[instrument(skip_all, fields(note_id = %note.id))]
    pub async fn write_archive(
        &self,
        note: &Note,
        result: &EnrichmentResult,
        body: &str,
        related: &[RelatedNote],
    ) -> Result<String> {
        let content = render_document(&result.title, note.created_at, &result.tags, body, related);
        let path = archive_path(&self.archive_dir, note.created_at, &result.title);
        let message = format!("Add: {}", result.title);

        self.archive.write(&path, &content, &message).await?;
        debug!(archive_path = %path, "Wrote archive document");
        Ok(path)
    }
}

/// Whether any heading block's text contains the related-section marker.
fn has_related_section(blocks: &[ContentBlock]) -> bool {
    blocks.iter().any(|block| {
        matches!(block.kind, BlockKind::Heading(_))
            && block.text.contains(defaults::RELATED_SECTION_MARKER)
    })
}
