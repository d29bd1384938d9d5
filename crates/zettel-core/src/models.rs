//! Core data types for the zettel pipeline.
//!
//! Notes are owned by the external document store; the pipeline holds read
//! snapshots plus write intents (`NoteUpdate`, `AppendBlock`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults;

// =============================================================================
// NOTES
// =============================================================================

/// Processing status of a note in the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    Unprocessed,
    Processed,
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unprocessed => write!(f, "unprocessed"),
            Self::Processed => write!(f, "processed"),
        }
    }
}

/// Read snapshot of a note from the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque identifier assigned by the document store.
    pub id: String,
    /// Current title (may be empty for raw capture notes).
    pub title: String,
    /// Tag set; order carries no meaning.
    pub tags: Vec<String>,
    /// Processing status property.
    pub status: NoteStatus,
    /// Whether the AI-processed flag is set.
    pub ai_processed: bool,
    /// Creation time, used for archive file naming.
    pub created_at: DateTime<Utc>,
    /// Opaque edit-revision token (last-edited time as reported by the
    /// store). Compared only for equality against the ledger.
    pub revision: String,
}

// =============================================================================
// CONTENT BLOCKS
// =============================================================================

/// Kind of a structured content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1-3.
    Heading(u8),
    BulletedListItem,
    NumberedListItem,
    ToDo {
        checked: bool,
    },
    /// Unrecognized block kind, preserved for forward compatibility.
    /// Extraction ignores these without error.
    Other(String),
}

/// One structured content block with its flattened rich text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl ContentBlock {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// =============================================================================
// ENRICHMENT
// =============================================================================

/// Metadata derived from a note by the analysis backend.
///
/// Produced once per processing pass and never partially applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    /// Claim-style title summarizing the note's core idea.
    pub title: String,
    /// 3-5 topical tags.
    pub tags: Vec<String>,
    /// Short prose summary.
    pub summary: String,
    /// Concrete terms used for lexical related-note matching.
    pub keywords: Vec<String>,
}

impl EnrichmentResult {
    /// Default metadata used when the analysis backend fails.
    ///
    /// Title becomes the `untitled` placeholder, tags fall back to the
    /// note's pre-existing tags (or the `unclassified` sentinel), the
    /// summary is the head of the input text, and keywords stay empty so
    /// no related-note links are fabricated.
    pub fn fallback(text: &str, existing_tags: &[String]) -> Self {
        let tags = if existing_tags.is_empty() {
            vec![defaults::UNCLASSIFIED_TAG.to_string()]
        } else {
            existing_tags.to_vec()
        };
        Self {
            title: defaults::UNTITLED_TITLE.to_string(),
            tags,
            summary: text.chars().take(defaults::SUMMARY_FALLBACK_CHARS).collect(),
            keywords: Vec::new(),
        }
    }
}

/// A candidate related note with its lexical relevance score.
///
/// Ephemeral: recomputed every run from the corpus snapshot and only
/// persisted as rendered backlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedNote {
    pub id: String,
    pub title: String,
    pub score: u32,
}

// =============================================================================
// LEDGER
// =============================================================================

/// Outcome of a processing attempt, as recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Error { reason: String },
}

impl Outcome {
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Ledger record for one note.
///
/// `revision` reflects the *input* note state at processing time, not the
/// enriched output; it is the staleness baseline for the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub title: String,
    pub processed_at: DateTime<Utc>,
    pub revision: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

// =============================================================================
// CORPUS SNAPSHOT
// =============================================================================

/// Point-in-time view of every note's title and tags.
///
/// Captured once per run before any mutation and used exclusively for
/// related-note scoring, so a note being processed never matches against
/// its own yet-unwritten metadata.
#[derive(Debug, Clone, Default)]
pub struct CorpusSnapshot {
    notes: Vec<Note>,
}

impl CorpusSnapshot {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

// =============================================================================
// WRITE INTENTS
// =============================================================================

/// Filter predicate for listing notes from the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFilter {
    /// `status == unprocessed OR ai_processed == false`.
    Unprocessed,
}

/// Field update applied to a note after enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteUpdate {
    pub title: String,
    pub tags: Vec<String>,
    pub status: NoteStatus,
    pub ai_processed: bool,
}

/// Block appended to a note's body (the backlink section).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendBlock {
    Divider,
    Heading(String),
    /// Cross-reference link to another note, rendered by the store client.
    Reference { note_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            tags: vec![],
            status: NoteStatus::Unprocessed,
            ai_processed: false,
            created_at: Utc::now(),
            revision: "r1".to_string(),
        }
    }

    #[test]
    fn test_note_status_display() {
        assert_eq!(NoteStatus::Unprocessed.to_string(), "unprocessed");
        assert_eq!(NoteStatus::Processed.to_string(), "processed");
    }

    #[test]
    fn test_note_status_serde_snake_case() {
        let json = serde_json::to_string(&NoteStatus::Unprocessed).unwrap();
        assert_eq!(json, "\"unprocessed\"");
        let back: NoteStatus = serde_json::from_str("\"processed\"").unwrap();
        assert_eq!(back, NoteStatus::Processed);
    }

    #[test]
    fn test_fallback_with_existing_tags() {
        let tags = vec!["rust".to_string(), "notes".to_string()];
        let result = EnrichmentResult::fallback("Some note body text", &tags);

        assert_eq!(result.title, "untitled");
        assert_eq!(result.tags, tags);
        assert_eq!(result.summary, "Some note body text");
        assert!(result.keywords.is_empty());
    }

    #[test]
    fn test_fallback_without_existing_tags() {
        let result = EnrichmentResult::fallback("body", &[]);
        assert_eq!(result.tags, vec!["unclassified".to_string()]);
    }

    #[test]
    fn test_fallback_summary_truncated_to_100_chars() {
        let text = "x".repeat(250);
        let result = EnrichmentResult::fallback(&text, &[]);
        assert_eq!(result.summary.chars().count(), 100);
    }

    #[test]
    fn test_fallback_summary_char_boundary() {
        // Multibyte input must truncate on characters, not bytes.
        let text = "日".repeat(150);
        let result = EnrichmentResult::fallback(&text, &[]);
        assert_eq!(result.summary.chars().count(), 100);
    }

    #[test]
    fn test_outcome_serde_roundtrip() {
        let entry = LedgerEntry {
            title: "A note".to_string(),
            processed_at: Utc::now(),
            revision: "2026-01-01T00:00:00Z".to_string(),
            outcome: Outcome::error("store down"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("store down"));

        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_outcome_is_success() {
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::error("boom").is_success());
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let snapshot = CorpusSnapshot::new(vec![note("a", "first"), note("b", "second")]);
        let ids: Vec<&str> = snapshot.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_content_block_new() {
        let block = ContentBlock::new(BlockKind::Heading(2), "Title");
        assert_eq!(block.kind, BlockKind::Heading(2));
        assert_eq!(block.text, "Title");
    }
}
