//! Batch runner driving the per-note processing sequence.
//!
//! Processing is strictly sequential: one note fully completes (or fails)
//! before the next begins. The external APIs are rate-limited, so the
//! design trades throughput for predictable request pacing. A fixed delay
//! follows each fully processed note, and the store client paces its own
//! listing pages. Nothing is cancelled mid-flight; the unit of cancellation
//! is "stop submitting new notes".

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use zettel_core::{
    defaults, extract_text, find_related, AnalysisBackend, ArchiveStore, CorpusSnapshot,
    DocumentStore, EnrichmentResult, Note, NoteFilter, Outcome, Result,
};
use zettel_inference::MetadataEnricher;

use crate::ledger::Ledger;
use crate::persist::NotePersister;

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Cap on the number of candidate notes processed (None = all).
    pub limit: Option<usize>,
    /// Process every note in the snapshot, ignoring filter and ledger.
    pub force_reprocess: bool,
    /// Minimum extracted-content length; shorter notes are skipped.
    pub min_content_chars: usize,
    /// Maximum related notes linked per note.
    pub related_top_k: usize,
    /// Fixed delay after each fully processed note.
    pub note_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: None,
            force_reprocess: false,
            min_content_chars: defaults::MIN_CONTENT_CHARS,
            related_top_k: defaults::RELATED_TOP_K,
            note_delay: Duration::from_millis(defaults::NOTE_DELAY_MS),
        }
    }
}

impl RunConfig {
    /// Create config from environment variables (with defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `ZETTEL_RUN_LIMIT` | none | Max notes per run |
    /// | `ZETTEL_FORCE_REPROCESS` | `false` | Reprocess everything |
    /// | `ZETTEL_NOTE_DELAY_MS` | `1000` | Inter-note pacing delay |
    pub fn from_env() -> Self {
        let limit = std::env::var("ZETTEL_RUN_LIMIT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        let force_reprocess = std::env::var("ZETTEL_FORCE_REPROCESS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let note_delay_ms = std::env::var("ZETTEL_NOTE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::NOTE_DELAY_MS);

        Self {
            limit,
            force_reprocess,
            note_delay: Duration::from_millis(note_delay_ms),
            ..Self::default()
        }
    }

    /// Cap the number of processed notes.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enable or disable force reprocessing.
    pub fn with_force_reprocess(mut self, force: bool) -> Self {
        self.force_reprocess = force;
        self
    }

    /// Set the inter-note pacing delay.
    pub fn with_note_delay(mut self, delay: Duration) -> Self {
        self.note_delay = delay;
        self
    }
}

/// Terminal outcome of processing one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// All stages completed and the enriched title was persisted.
    Completed { title: String },
    /// Extracted content was below the minimum length. No ledger entry is
    /// written, so the note is re-examined on every run until it grows.
    SkippedTooShort,
}

/// Aggregate counts for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} succeeded, {} failed, {} skipped ({} total)",
            self.succeeded, self.failed, self.skipped, self.total
        )
    }
}

/// The batch pipeline: snapshot, candidate selection, per-note processing.
pub struct Pipeline {
    store: Arc<dyn DocumentStore>,
    enricher: MetadataEnricher,
    persister: NotePersister,
    ledger: Ledger,
    config: RunConfig,
}

impl Pipeline {
    /// Create a pipeline over the three collaborators and a loaded ledger.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        backend: Arc<dyn AnalysisBackend>,
        archive: Arc<dyn ArchiveStore>,
        ledger: Ledger,
        config: RunConfig,
    ) -> Self {
        let enricher = MetadataEnricher::new(backend);
        let persister = NotePersister::new(store.clone(), archive);
        Self {
            store,
            enricher,
            persister,
            ledger,
            config,
        }
    }

    /// Override the archive directory used by the persister.
    pub fn with_archive_dir(mut self, dir: impl Into<String>) -> Self {
        self.persister = self.persister.with_archive_dir(dir);
        self
    }

    /// Access the ledger (primarily for inspection after a run).
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Execute one batch run.
    ///
    /// The corpus snapshot is captured before any mutation; failure to
    /// obtain it aborts the whole run (the only fatal error). Per-note
    /// failures are recorded in the ledger and counted, and the batch
    /// always continues to the next note.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<RunSummary> {
        // Fail-fast before side effects: no snapshot, no run.
        let snapshot = CorpusSnapshot::new(self.store.list_notes(None).await?);
        info!(note_count = snapshot.len(), "Captured corpus snapshot");

        let mut candidates: Vec<Note> = if self.config.force_reprocess {
            warn!("Force reprocess: every note in the snapshot is a candidate");
            snapshot.notes().to_vec()
        } else {
            let listed = self.store.list_notes(Some(NoteFilter::Unprocessed)).await?;
            let listed_count = listed.len();
            let stale: Vec<Note> = listed
                .into_iter()
                .filter(|note| self.ledger.is_stale(&note.id, &note.revision))
                .collect();
            debug!(
                listed = listed_count,
                stale = stale.len(),
                "Pruned candidates against ledger"
            );
            stale
        };

        if let Some(limit) = self.config.limit {
            if candidates.len() > limit {
                info!(limit, "Capping candidate count");
                candidates.truncate(limit);
            }
        }

        let mut summary = RunSummary {
            total: candidates.len(),
            ..RunSummary::default()
        };
        info!(candidate_count = summary.total, "Starting batch run");

        for (index, note) in candidates.iter().enumerate() {
            debug!(
                note_id = %note.id,
                progress = %format!("{}/{}", index + 1, summary.total),
                "Processing note"
            );

            match self.process_note(note, &snapshot).await {
                Ok(NoteOutcome::Completed { title }) => {
                    if let Err(e) =
                        self.ledger
                            .record(&note.id, &title, &note.revision, Outcome::Success)
                    {
                        warn!(note_id = %note.id, error = %e, "Failed to persist ledger entry");
                    }
                    summary.succeeded += 1;
                    info!(note_id = %note.id, title = %title, "Note processed");

                    // Pacing after each fully processed note.
                    sleep(self.config.note_delay).await;
                }
                Ok(NoteOutcome::SkippedTooShort) => {
                    // Deliberately no ledger entry: trivial notes are
                    // re-checked every run until they grow.
                    summary.skipped += 1;
                    debug!(note_id = %note.id, "Skipped: content too short");
                }
                Err(e) => {
                    let title = if note.title.is_empty() {
                        defaults::UNTITLED_TITLE
                    } else {
                        note.title.as_str()
                    };
                    if let Err(ledger_err) = self.ledger.record(
                        &note.id,
                        title,
                        &note.revision,
                        Outcome::error(e.to_string()),
                    ) {
                        warn!(note_id = %note.id, error = %ledger_err, "Failed to persist ledger entry");
                    }
                    summary.failed += 1;
                    error!(note_id = %note.id, error = %e, "Note failed");
                }
            }
        }

        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            total = summary.total,
            "Batch run complete"
        );
        Ok(summary)
    }

    /// Process a single note through extraction, enrichment, linking, and
    /// persistence.
    async fn process_note(
        &self,
        note: &Note,
        snapshot: &CorpusSnapshot,
    ) -> Result<NoteOutcome> {
        let blocks = self.store.get_blocks(&note.id).await?;
        let body = extract_text(&blocks);

        if body.chars().count() < self.config.min_content_chars {
            return Ok(NoteOutcome::SkippedTooShort);
        }

        let result = match self.enricher.enrich(&body, &note.tags).await {
            Ok(result) => result,
            Err(e) if e.is_recoverable_analysis() => {
                warn!(note_id = %note.id, error = %e, "Analysis failed, using fallback metadata");
                EnrichmentResult::fallback(&body, &note.tags)
            }
            Err(e) => return Err(e),
        };

        let related = find_related(&result.keywords, &note.id, snapshot, self.config.related_top_k);
        debug!(
            note_id = %note.id,
            related_count = related.len(),
            "Ranked related notes"
        );

        self.persister.apply_to_store(note, &result, &related).await?;
        self.persister
            .write_archive(note, &result, &body, &related)
            .await?;

        Ok(NoteOutcome::Completed {
            title: result.title,
        })
    }
}
